//! Configuration data models
//!
//! This module defines all configuration structures used by the access layer.

#![allow(missing_docs)]

pub mod access;
pub mod logging;
pub mod navigation;
pub mod routing;
pub mod session;

// Re-export all configuration types
pub use access::*;
pub use logging::*;
pub use navigation::*;
pub use routing::*;
pub use session::*;

/// Default persistence key for the auth token
pub fn default_token_key() -> String {
    "token".to_string()
}

/// Default persistence key for the user record
pub fn default_user_data_key() -> String {
    "userData".to_string()
}

/// Default persistence key for the permission payload
pub fn default_permissions_key() -> String {
    "permissions".to_string()
}

/// Default login view
pub fn default_login_path() -> String {
    "/login".to_string()
}

/// Default landing view
pub fn default_home_path() -> String {
    "/".to_string()
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
