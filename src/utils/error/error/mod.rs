//! Error types for the access layer

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{AccessError, Result};
