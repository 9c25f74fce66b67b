//! DEFLATE compression pipeline
//!
//! Windowed input arrangement, growable output buffering, and the engine
//! driver that ties them together into one synchronous compression call.

mod buffer;
mod driver;

pub use buffer::OutputBuffer;
pub use driver::Compressor;

use crate::common::Result;

/// Convenience function to compress data in memory with the production engine
pub fn compress_bytes(data: &[u8], level: i32) -> Result<Vec<u8>> {
    Compressor::new(level).compress(data)
}
