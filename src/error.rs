//! Error handling for compression operations
//!
//! This module re-exports the error types defined in [`crate::common`].
//! It uses thiserror for ergonomic error handling and provides a structured
//! diagnostic for engine-reported failures.

pub use crate::common::Result;
pub use crate::common::ZflateError;
pub use crate::common::{EngineDiagnostic, Phase};
