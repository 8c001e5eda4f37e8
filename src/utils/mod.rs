//! Utility modules for the access layer
//!
//! - **error**: error types shared by config, session and CLI code
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{AccessError, Result};
pub use logging::init_logging;
