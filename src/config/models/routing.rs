//! Route table configuration

use super::*;
use crate::auth::rbac::PermissionType;
use crate::auth::rbac::features;
use serde::{Deserialize, Serialize};

/// One navigable view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Exact path of the view
    pub path: String,
    /// `false` marks public-only views such as the login page
    #[serde(default = "default_true")]
    pub require_auth: bool,
    /// Feature gating the view; permission-agnostic when unset
    #[serde(default)]
    pub feature: Option<String>,
    #[serde(default)]
    pub permission: PermissionType,
}

impl RouteConfig {
    /// Authenticated view gated on `feature`
    pub fn protected(path: &str, feature: Option<&str>) -> Self {
        Self {
            path: path.to_string(),
            require_auth: true,
            feature: feature.map(str::to_string),
            permission: PermissionType::Read,
        }
    }

    /// View only shown to signed-out users
    pub fn public_only(path: &str) -> Self {
        Self {
            path: path.to_string(),
            require_auth: false,
            feature: None,
            permission: PermissionType::Read,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Redirect target for unauthenticated users
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Redirect target for authenticated users hitting public-only views
    #[serde(default = "default_home_path")]
    pub home_path: String,
    #[serde(default = "default_routes")]
    pub routes: Vec<RouteConfig>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            home_path: default_home_path(),
            routes: default_routes(),
        }
    }
}

impl RoutingConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.login_path != default_login_path() {
            self.login_path = other.login_path;
        }
        if other.home_path != default_home_path() {
            self.home_path = other.home_path;
        }
        if other.routes != default_routes() {
            self.routes = other.routes;
        }
        self
    }
}

/// Dashboard views shipped by default
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::public_only("/login"),
        RouteConfig::protected("/", None),
        RouteConfig::protected("/tenders", Some(features::TENDER_MANAGEMENT)),
        RouteConfig::protected("/clashes", Some(features::CLASH_MANAGEMENT)),
        RouteConfig::protected("/inventory", Some(features::INVENTORY_MANAGEMENT)),
        RouteConfig::protected("/roles", Some(features::ROLE_MANAGEMENT)),
        RouteConfig::protected("/users", Some(features::USER_MANAGEMENT)),
        RouteConfig::protected("/departments", Some(features::DEPARTMENT_MANAGEMENT)),
        RouteConfig::protected("/dev", None),
        RouteConfig::protected("/dev/tenders", Some(features::DEV_TENDER_MANAGEMENT)),
        RouteConfig::protected("/dev/clashes", Some(features::DEV_CLASH_MANAGEMENT)),
        RouteConfig::protected("/dev/inventory", Some(features::DEV_INVENTORY_MANAGEMENT)),
        RouteConfig::protected("/dev/roles", Some(features::DEV_ROLE_MANAGEMENT)),
        RouteConfig::protected("/dev/users", Some(features::DEV_USER_MANAGEMENT)),
        RouteConfig::protected("/dev/departments", Some(features::DEV_DEPARTMENT_MANAGEMENT)),
        RouteConfig::protected("/dev/features", Some(features::DEV_FEATURE_MANAGEMENT)),
    ]
}
