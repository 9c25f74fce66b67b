//! Compression driver
//!
//! Owns the engine lifecycle for one call: initialize at the requested level,
//! loop transform steps over engine-sized input windows and a growable output
//! buffer, finalize, and hand back the exact-length result. Every exit path
//! releases the engine exactly once and discards the partial output on
//! failure.

use std::marker::PhantomData;

use log::{debug, trace};

use super::buffer::OutputBuffer;
use crate::common::{
    EngineDiagnostic, Phase, Result, ZflateError, DEF_BUF_SIZE, MEM_ERROR, STREAM_ERROR,
};
use crate::engine::{DeflateEngine, EngineFailure, FlushMode, StepStatus, ZlibEngine};

/// Split the unconsumed input length into the next engine-sized window
///
/// Returns `(window, new_remaining)` with the window bounded by the engine's
/// single-transfer limit. A zero `new_remaining` means the window is the last
/// one and the engine must be asked to finish the stream.
pub(crate) fn arrange_input(remaining: usize, max_transfer: usize) -> (usize, usize) {
    let window = remaining.min(max_transfer);
    (window, remaining - window)
}

/// One-shot compressor owning its engine for the duration of a call
///
/// Each [`compress`](Self::compress) call creates a fresh engine and output
/// buffer, so concurrent calls from multiple threads are independent. The
/// engine type is pluggable; [`ZlibEngine`] is the production default.
#[derive(Debug)]
pub struct Compressor<E: DeflateEngine = ZlibEngine> {
    level: i32,
    initial_capacity: usize,
    max_output_len: usize,
    _engine: PhantomData<E>,
}

impl Compressor {
    /// Compressor for the production engine at the given level
    pub fn new(level: i32) -> Self {
        Self::for_engine(level)
    }
}

impl<E: DeflateEngine> Compressor<E> {
    /// Compressor for any engine implementation at the given level
    pub fn for_engine(level: i32) -> Self {
        Self {
            level,
            initial_capacity: DEF_BUF_SIZE,
            max_output_len: usize::MAX,
            _engine: PhantomData,
        }
    }

    /// Override the output buffer's first allocation size
    pub fn with_initial_capacity(mut self, bytes: usize) -> Self {
        self.initial_capacity = bytes;
        self
    }

    /// Bound the output buffer; compression fails with
    /// [`ZflateError::BufferLimitExceeded`] instead of growing past `bytes`
    pub fn with_max_output_len(mut self, bytes: usize) -> Self {
        self.max_output_len = bytes;
        self
    }

    /// Compress `data` into an owned, exact-length byte buffer
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let engine = E::init(self.level).map_err(|failure| init_error(self.level, failure))?;
        debug!("engine initialized at level {}", self.level);
        self.drive(engine, data)
    }

    /// Run the transfer loop to completion over an initialized engine
    fn drive(&self, mut engine: E, data: &[u8]) -> Result<Vec<u8>> {
        let max_transfer = engine.max_transfer();
        let mut buffer = OutputBuffer::new(self.initial_capacity, self.max_output_len);
        let mut remaining = data.len();
        let mut offset = 0usize;

        loop {
            let (window, rest) = arrange_input(remaining, max_transfer);
            remaining = rest;
            let flush = if remaining == 0 {
                FlushMode::Finish
            } else {
                FlushMode::Continue
            };
            let mut chunk = &data[offset..offset + window];

            // Keep stepping over the same input window while the engine
            // fills every output window it is given: a full window means
            // output may still be pending inside the engine.
            let status = loop {
                let out = buffer.arrange(max_transfer)?;
                let out_len = out.len();
                let transfer = engine
                    .step(chunk, out, flush)
                    .map_err(|failure| step_error(Phase::Compress, failure))?;
                trace!(
                    "step consumed {} produced {} of window {out_len}",
                    transfer.consumed,
                    transfer.produced
                );
                if transfer.consumed > chunk.len() || transfer.produced > out_len {
                    return Err(contract_violation());
                }
                chunk = &chunk[transfer.consumed..];
                offset += transfer.consumed;
                buffer.commit(transfer.produced);

                if transfer.status == StepStatus::StreamEnd {
                    break transfer.status;
                }
                if transfer.produced < out_len {
                    break transfer.status;
                }
            };

            // The engine must drain each input window before the next one is
            // arranged; leftover input here is a contract violation.
            if !chunk.is_empty() {
                return Err(contract_violation());
            }
            if flush == FlushMode::Finish {
                if status != StepStatus::StreamEnd {
                    return Err(contract_violation());
                }
                break;
            }
        }

        engine
            .end()
            .map_err(|failure| step_error(Phase::Finish, failure))?;
        debug!(
            "compressed {} bytes into {} bytes",
            data.len(),
            buffer.occupied()
        );
        Ok(buffer.into_bytes())
    }
}

/// Map an initialization failure onto the error taxonomy
fn init_error(level: i32, failure: EngineFailure) -> ZflateError {
    match failure.code {
        MEM_ERROR => ZflateError::OutOfMemory,
        STREAM_ERROR => ZflateError::BadCompressionLevel(level),
        code => ZflateError::Engine(EngineDiagnostic::new(code, Phase::Compress, failure.message)),
    }
}

/// Wrap an engine failure from a transform step or finalization
fn step_error(phase: Phase, failure: EngineFailure) -> ZflateError {
    ZflateError::Engine(EngineDiagnostic::new(failure.code, phase, failure.message))
}

/// Error for an engine that broke the transfer-loop contract
fn contract_violation() -> ZflateError {
    ZflateError::Engine(EngineDiagnostic::new(STREAM_ERROR, Phase::Compress, None))
}
