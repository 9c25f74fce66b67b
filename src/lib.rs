//! zflate - streaming zlib/DEFLATE compression with bounded buffer growth
//!
//! This crate drives an incremental DEFLATE engine over an input of arbitrary
//! size. Input is fed in engine-sized transfer windows (the engine's native
//! limit is a 32-bit length field), output accumulates in a single contiguous
//! buffer that doubles on demand up to a configurable maximum, and every
//! engine failure surfaces as a categorized error. The produced stream is the
//! standard zlib-wrapped DEFLATE format.
//!
//! # Features
//!
//! - One-shot compression of byte slices of any size
//! - Chunked transfers for inputs and outputs beyond the 32-bit engine limit
//! - Adaptive output-buffer growth with an optional hard cap
//! - Structured diagnostics carrying the engine status code and phase
//! - Pluggable engine trait for testing the driver without a real compressor
//!
//! # Example
//!
//! ```
//! use zflate::{compress_bytes, BEST_COMPRESSION, DEFAULT_COMPRESSION};
//!
//! let data = b"Hello, World! Hello, World! Hello, World!";
//! let compressed = compress_bytes(data, DEFAULT_COMPRESSION)?;
//! assert!(!compressed.is_empty());
//!
//! // Smallest output at the cost of speed.
//! let smallest = compress_bytes(data, BEST_COMPRESSION)?;
//! # Ok::<(), zflate::ZflateError>(())
//! ```
//!
//! # Example - bounded output
//!
//! ```
//! use zflate::{Compressor, ZflateError, BEST_SPEED};
//!
//! let compressor = Compressor::new(BEST_SPEED).with_max_output_len(64);
//! let incompressible: Vec<u8> = (0..4096u32)
//!     .map(|i| (i.wrapping_mul(2654435761) >> 24) as u8)
//!     .collect();
//! match compressor.compress(&incompressible) {
//!     Err(ZflateError::BufferLimitExceeded(64)) => {}
//!     other => panic!("expected the buffer limit to trip, got {other:?}"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Public modules
pub mod common;
pub mod deflate;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use common::{
    engine_constants, EngineDiagnostic, Phase, Result, ZflateError, BEST_COMPRESSION, BEST_SPEED,
    BLOCK, BUF_ERROR, DATA_ERROR, DEFAULT_COMPRESSION, DEFAULT_STRATEGY, DEF_BUF_SIZE, ERRNO,
    FILTERED, FINISH, FIXED, FULL_FLUSH, HUFFMAN_ONLY, MAX_TRANSFER, MEM_ERROR, NEED_DICT,
    NO_COMPRESSION, NO_FLUSH, OK, PARTIAL_FLUSH, RLE, STREAM_END, STREAM_ERROR, SYNC_FLUSH, TREES,
    VERSION_ERROR,
};
pub use deflate::{compress_bytes, Compressor, OutputBuffer};
pub use engine::{
    DeflateEngine, EngineFailure, EngineResult, FlushMode, StepStatus, Transfer, ZlibEngine,
};
