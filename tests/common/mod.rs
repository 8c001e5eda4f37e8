//! Common test utilities for coordhub-access

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{PermissionSetFactory, SessionFactory};
