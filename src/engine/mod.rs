//! Compression engine abstraction
//!
//! The driver treats the DEFLATE engine as an opaque dependency behind the
//! [`DeflateEngine`] trait: initialize with a level, feed input/output windows
//! through transform steps, finalize once. This keeps the transfer-loop logic
//! testable against deterministic engines that never touch a real compressor.

mod zlib;

pub use zlib::ZlibEngine;

use crate::common::MAX_TRANSFER;

/// Flush request for one transform step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushMode {
    /// More input will follow this window
    Continue,
    /// This window is the last; emit final bits and the stream trailer
    Finish,
}

/// Terminal signal from one transform step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The engine made progress and can accept further steps
    Ok,
    /// All input is consumed and the stream trailer has been written
    StreamEnd,
}

/// Byte movement observed in one transform step
#[derive(Debug, Clone, Copy)]
pub struct Transfer {
    /// Input bytes the engine read from the window
    pub consumed: usize,
    /// Output bytes the engine wrote into the window
    pub produced: usize,
    /// Engine signal after the step
    pub status: StepStatus,
}

/// Failure raised by the engine, before diagnostic formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineFailure {
    /// Engine status code
    pub code: i32,
    /// Engine-supplied message, if the engine set one
    pub message: Option<String>,
}

impl EngineFailure {
    /// Failure with a bare status code
    pub fn code(code: i32) -> Self {
        Self {
            code,
            message: None,
        }
    }
}

/// Result type for engine calls
pub type EngineResult<T> = std::result::Result<T, EngineFailure>;

/// Contract for an incremental DEFLATE compression engine
///
/// An engine value is exclusively owned by one compression call: created by
/// [`init`](Self::init), stepped until it reports
/// [`StepStatus::StreamEnd`], then consumed by [`end`](Self::end). Dropping
/// an engine without calling `end` releases its resources; `end` exists so a
/// clean transform sequence can still surface a finalization failure.
pub trait DeflateEngine: Sized {
    /// Create an engine for the requested compression level
    ///
    /// An out-of-range level fails with [`crate::STREAM_ERROR`]; allocation
    /// failure reports [`crate::MEM_ERROR`].
    fn init(level: i32) -> EngineResult<Self>;

    /// Run one transform step over the given windows
    ///
    /// Both windows are at most [`max_transfer`](Self::max_transfer) bytes.
    /// The engine reads from `input`, writes into `output`, and reports how
    /// many bytes moved in each direction. `StreamEnd` is only valid once all
    /// input has been consumed under [`FlushMode::Finish`].
    fn step(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        flush: FlushMode,
    ) -> EngineResult<Transfer>;

    /// Finalize and release the engine
    fn end(self) -> EngineResult<()>;

    /// Largest byte count this engine accepts in a single transfer window
    fn max_transfer(&self) -> usize {
        MAX_TRANSFER
    }
}
