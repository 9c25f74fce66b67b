//! Common types and constants for zlib/DEFLATE compression
//!
//! This module defines the error taxonomy, the engine status codes, the
//! diagnostic formatter, and the constants the crate re-exports from the
//! underlying engine (compression levels, strategies, flush modes).

use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

// Engine status codes, as reported by a single transform step.

/// Step completed, more work may follow
pub const OK: i32 = 0;
/// All input consumed and the stream trailer has been emitted
pub const STREAM_END: i32 = 1;
/// A preset dictionary is required to continue
pub const NEED_DICT: i32 = 2;
/// Error outside the engine (file system level)
pub const ERRNO: i32 = -1;
/// Inconsistent engine state or invalid parameter
pub const STREAM_ERROR: i32 = -2;
/// Input data violates the compressed format
pub const DATA_ERROR: i32 = -3;
/// The engine could not allocate memory
pub const MEM_ERROR: i32 = -4;
/// No progress was possible with the given buffers
pub const BUF_ERROR: i32 = -5;
/// The linked engine library version does not match
pub const VERSION_ERROR: i32 = -6;

// Compression levels

/// Store only, no compression
pub const NO_COMPRESSION: i32 = 0;
/// Fastest compression
pub const BEST_SPEED: i32 = 1;
/// Smallest output
pub const BEST_COMPRESSION: i32 = 9;
/// Engine-chosen default trade-off
pub const DEFAULT_COMPRESSION: i32 = -1;

// Compression strategies

/// Default strategy for general data
pub const DEFAULT_STRATEGY: i32 = 0;
/// Strategy for filtered data (small values with random distribution)
pub const FILTERED: i32 = 1;
/// Huffman coding only, no string matching
pub const HUFFMAN_ONLY: i32 = 2;
/// Limit match distances to one (run-length encoding)
pub const RLE: i32 = 3;
/// Prevent dynamic Huffman codes
pub const FIXED: i32 = 4;

// Flush modes

/// Accumulate input for best compression
pub const NO_FLUSH: i32 = 0;
/// Flush pending output, padding with an empty block
pub const PARTIAL_FLUSH: i32 = 1;
/// Flush pending output to a byte boundary
pub const SYNC_FLUSH: i32 = 2;
/// Like sync flush, but also reset the dictionary window
pub const FULL_FLUSH: i32 = 3;
/// Finish the stream and emit the trailer
pub const FINISH: i32 = 4;
/// Complete the current block only
pub const BLOCK: i32 = 5;
/// Stop at the end of the Huffman code tree header
pub const TREES: i32 = 6;

/// Default initial size of the growable output buffer (16 KiB)
pub const DEF_BUF_SIZE: usize = 16 * 1024;

/// Largest byte count the engine accepts in a single transfer window
pub const MAX_TRANSFER: usize = u32::MAX as usize;

/// Operation phase an engine failure was observed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Failure during a transform step
    Compress,
    /// Failure while finalizing the stream
    Finish,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Compress => write!(f, "compressing data"),
            Phase::Finish => write!(f, "finishing compression"),
        }
    }
}

/// Structured diagnostic for an engine-reported failure
///
/// Carries the numeric status code, the phase the failure occurred in, and a
/// resolved message. The message is chosen in order of preference: the fixed
/// version-mismatch text, an engine-supplied string, a fixed per-code text,
/// or nothing (the Display form then omits the message part).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineDiagnostic {
    /// Engine status code
    pub code: i32,
    /// Phase the failure occurred in
    pub phase: Phase,
    /// Resolved message text, if any
    pub message: Option<String>,
}

impl EngineDiagnostic {
    /// Resolve a diagnostic from a raw status code and an optional
    /// engine-supplied message
    pub fn new(code: i32, phase: Phase, message: Option<String>) -> Self {
        // A version mismatch leaves the engine message uninitialized, so it
        // must be checked before the engine-supplied string.
        let message = if code == VERSION_ERROR {
            Some("library version mismatch".to_string())
        } else {
            message.or_else(|| fallback_message(code).map(str::to_string))
        };
        Self {
            code,
            phase,
            message,
        }
    }
}

impl fmt::Display for EngineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "Error {} while {}: {}", self.code, self.phase, msg),
            None => write!(f, "Error {} while {}", self.code, self.phase),
        }
    }
}

/// Fixed message for status codes the engine leaves undescribed
fn fallback_message(code: i32) -> Option<&'static str> {
    match code {
        BUF_ERROR => Some("incomplete or truncated stream"),
        STREAM_ERROR => Some("inconsistent stream state"),
        DATA_ERROR => Some("invalid input data"),
        _ => None,
    }
}

/// Error type for compression operations
#[derive(Debug, Error)]
pub enum ZflateError {
    /// Compression level rejected by the engine at initialization
    #[error("Bad compression level")]
    BadCompressionLevel(i32),

    /// The engine could not allocate its internal state
    #[error("Out of memory while compressing data")]
    OutOfMemory,

    /// The output buffer cannot grow past its configured maximum
    #[error("Compressed output exceeds the maximum buffer length of {0} bytes")]
    BufferLimitExceeded(usize),

    /// Engine-reported failure with a formatted diagnostic
    #[error("{0}")]
    Engine(EngineDiagnostic),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for compression operations
pub type Result<T> = std::result::Result<T, ZflateError>;

/// Name/value table of the constants this crate passes through from the
/// engine, built once on first use
pub fn engine_constants() -> &'static [(&'static str, i32)] {
    static CONSTANTS: OnceLock<Vec<(&'static str, i32)>> = OnceLock::new();
    CONSTANTS
        .get_or_init(|| {
            vec![
                ("DEF_BUF_SIZE", DEF_BUF_SIZE as i32),
                ("NO_COMPRESSION", NO_COMPRESSION),
                ("BEST_SPEED", BEST_SPEED),
                ("BEST_COMPRESSION", BEST_COMPRESSION),
                ("DEFAULT_COMPRESSION", DEFAULT_COMPRESSION),
                ("DEFAULT_STRATEGY", DEFAULT_STRATEGY),
                ("FILTERED", FILTERED),
                ("HUFFMAN_ONLY", HUFFMAN_ONLY),
                ("RLE", RLE),
                ("FIXED", FIXED),
                ("NO_FLUSH", NO_FLUSH),
                ("PARTIAL_FLUSH", PARTIAL_FLUSH),
                ("SYNC_FLUSH", SYNC_FLUSH),
                ("FULL_FLUSH", FULL_FLUSH),
                ("FINISH", FINISH),
                ("BLOCK", BLOCK),
                ("TREES", TREES),
            ]
        })
        .as_slice()
}
