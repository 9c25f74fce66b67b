//! Production engine backed by `flate2`
//!
//! Wraps [`flate2::Compress`] configured for the zlib container format, so
//! the produced stream is bit-compatible with the reference zlib library at
//! the same level. Allocation happens through the process global allocator,
//! which is thread-safe without any caller-held lock.

use flate2::{Compress, Compression, FlushCompress, Status};

use super::{DeflateEngine, EngineFailure, EngineResult, FlushMode, StepStatus, Transfer};
use crate::common::{DEFAULT_COMPRESSION, STREAM_ERROR};

/// Incremental DEFLATE engine producing zlib-wrapped streams
#[derive(Debug)]
pub struct ZlibEngine {
    raw: Compress,
}

impl DeflateEngine for ZlibEngine {
    fn init(level: i32) -> EngineResult<Self> {
        let compression = match level {
            DEFAULT_COMPRESSION => Compression::default(),
            0..=9 => Compression::new(level as u32),
            _ => return Err(EngineFailure::code(STREAM_ERROR)),
        };
        Ok(Self {
            raw: Compress::new(compression, true),
        })
    }

    fn step(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        flush: FlushMode,
    ) -> EngineResult<Transfer> {
        let flush = match flush {
            FlushMode::Continue => FlushCompress::None,
            FlushMode::Finish => FlushCompress::Finish,
        };

        let before_in = self.raw.total_in();
        let before_out = self.raw.total_out();
        let status = self
            .raw
            .compress(input, output, flush)
            .map_err(|_| EngineFailure::code(STREAM_ERROR))?;
        let consumed = (self.raw.total_in() - before_in) as usize;
        let produced = (self.raw.total_out() - before_out) as usize;

        let status = match status {
            Status::StreamEnd => StepStatus::StreamEnd,
            // BufError means no progress was possible with the current
            // windows; the driver reacts by rearranging them.
            Status::Ok | Status::BufError => StepStatus::Ok,
        };

        Ok(Transfer {
            consumed,
            produced,
            status,
        })
    }

    fn end(self) -> EngineResult<()> {
        // flate2 releases the underlying stream state on drop and exposes no
        // failing teardown path.
        Ok(())
    }
}
