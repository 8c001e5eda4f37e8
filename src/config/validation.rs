//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use crate::auth::rbac::features;
use crate::utils::error::{AccessError, Result};
use std::collections::HashSet;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn validate_view_path(path: &str, context: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AccessError::config(format!("{} cannot be empty", context)));
    }
    if !path.starts_with('/') {
        return Err(AccessError::config(format!(
            "{} must be an absolute path, got: {}",
            context, path
        )));
    }
    Ok(())
}

fn warn_unknown_feature(feature: Option<&str>, context: &str) {
    if let Some(feature) = feature {
        if !features::is_known(feature) {
            warn!(
                "{} references unknown feature '{}'; it will be denied for every user",
                context, feature
            );
        }
    }
}

impl Validate for AccessConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating access configuration");

        self.session.validate()?;
        self.routing.validate()?;
        self.navigation.validate()?;
        self.logging.validate()?;

        debug!("Access configuration validation completed");
        Ok(())
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<()> {
        let keys = [
            ("token_key", &self.token_key),
            ("user_data_key", &self.user_data_key),
            ("permissions_key", &self.permissions_key),
        ];

        let mut seen = HashSet::new();
        for (name, key) in keys {
            if key.is_empty() {
                return Err(AccessError::config(format!(
                    "Session {} cannot be empty",
                    name
                )));
            }
            if !seen.insert(key.as_str()) {
                return Err(AccessError::config(format!(
                    "Session key '{}' is used more than once",
                    key
                )));
            }
        }

        if let Some(path) = &self.store_path {
            if path.as_os_str().is_empty() {
                return Err(AccessError::config("Session store path cannot be empty"));
            }
        }

        Ok(())
    }
}

impl Validate for RoutingConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating routing configuration");

        validate_view_path(&self.login_path, "Login path")?;
        validate_view_path(&self.home_path, "Home path")?;

        if self.login_path == self.home_path {
            return Err(AccessError::config(
                "Login path and home path must differ",
            ));
        }

        let mut paths = HashSet::new();
        for route in &self.routes {
            validate_view_path(&route.path, "Route path")?;

            if !paths.insert(route.path.as_str()) {
                return Err(AccessError::config(format!(
                    "Duplicate route path: {}",
                    route.path
                )));
            }

            if !route.require_auth && route.feature.is_some() {
                return Err(AccessError::config(format!(
                    "Public-only route {} cannot be gated on a feature",
                    route.path
                )));
            }

            // Either of these would bounce between login and home forever
            if route.path == self.login_path && route.require_auth {
                return Err(AccessError::config(format!(
                    "Login route {} must not require authentication",
                    route.path
                )));
            }
            if route.path == self.home_path && !route.require_auth {
                return Err(AccessError::config(format!(
                    "Home route {} must require authentication",
                    route.path
                )));
            }

            warn_unknown_feature(route.feature.as_deref(), &format!("Route {}", route.path));
        }

        Ok(())
    }
}

impl Validate for NavigationConfig {
    fn validate(&self) -> Result<()> {
        for item in &self.items {
            if item.label.trim().is_empty() {
                return Err(AccessError::config(format!(
                    "Navigation item for {} has an empty label",
                    item.path
                )));
            }
            validate_view_path(&item.path, "Navigation path")?;
            warn_unknown_feature(
                item.feature.as_deref(),
                &format!("Navigation item '{}'", item.label),
            );
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<()> {
        EnvFilter::try_new(&self.level).map_err(|e| {
            AccessError::config(format!("Invalid log level '{}': {}", self.level, e))
        })?;
        Ok(())
    }
}
