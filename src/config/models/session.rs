//! Session persistence configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where and under which keys session data is persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key holding the auth token
    #[serde(default = "default_token_key")]
    pub token_key: String,
    /// Key holding the user record
    #[serde(default = "default_user_data_key")]
    pub user_data_key: String,
    /// Key holding the serialized permission set
    #[serde(default = "default_permissions_key")]
    pub permissions_key: String,
    /// JSON file backing the session; in-memory when unset
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            user_data_key: default_user_data_key(),
            permissions_key: default_permissions_key(),
            store_path: None,
        }
    }
}

impl SessionConfig {
    /// Merge session configurations, other taking precedence on non-defaults
    pub fn merge(mut self, other: Self) -> Self {
        if other.token_key != default_token_key() {
            self.token_key = other.token_key;
        }
        if other.user_data_key != default_user_data_key() {
            self.user_data_key = other.user_data_key;
        }
        if other.permissions_key != default_permissions_key() {
            self.permissions_key = other.permissions_key;
        }
        if other.store_path.is_some() {
            self.store_path = other.store_path;
        }
        self
    }
}
