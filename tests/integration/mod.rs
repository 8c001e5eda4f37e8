//! Integration tests for coordhub-access
//!
//! These tests drive the public API end to end without mocking.

pub mod config_tests;
pub mod evaluator_tests;
pub mod guard_tests;
pub mod session_tests;
