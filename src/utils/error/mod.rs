//! Error handling utilities
//!
//! Evaluation never fails; these errors only surface at the edges
//! (configuration, persisted session data, CLI I/O).

pub mod error;

pub use error::*;
