//! Sidebar navigation configuration

use crate::auth::rbac::FeatureScope;
use crate::auth::rbac::features;
use serde::{Deserialize, Serialize};

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItemConfig {
    pub label: String,
    pub path: String,
    /// Feature whose `read` flag shows the entry; always shown when unset
    #[serde(default)]
    pub feature: Option<String>,
    /// Sidebar the entry belongs to; listed in every sidebar when unset
    #[serde(default)]
    pub scope: Option<FeatureScope>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default = "default_nav_items")]
    pub items: Vec<NavItemConfig>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            items: default_nav_items(),
        }
    }
}

impl NavigationConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.items != default_nav_items() {
            self.items = other.items;
        }
        self
    }
}

fn item(label: &str, path: &str, feature: Option<&str>, scope: FeatureScope) -> NavItemConfig {
    NavItemConfig {
        label: label.to_string(),
        path: path.to_string(),
        feature: feature.map(str::to_string),
        scope: Some(scope),
    }
}

/// Department and developer sidebars
pub fn default_nav_items() -> Vec<NavItemConfig> {
    use FeatureScope::{Department, Developer};

    vec![
        item("Dashboard", "/", None, Department),
        item("Tenders", "/tenders", Some(features::TENDER_MANAGEMENT), Department),
        item("Clashes", "/clashes", Some(features::CLASH_MANAGEMENT), Department),
        item("Inventory", "/inventory", Some(features::INVENTORY_MANAGEMENT), Department),
        item("Roles", "/roles", Some(features::ROLE_MANAGEMENT), Department),
        item("Users", "/users", Some(features::USER_MANAGEMENT), Department),
        item("Departments", "/departments", Some(features::DEPARTMENT_MANAGEMENT), Department),
        item("Dashboard", "/dev", None, Developer),
        item("Tenders", "/dev/tenders", Some(features::DEV_TENDER_MANAGEMENT), Developer),
        item("Clashes", "/dev/clashes", Some(features::DEV_CLASH_MANAGEMENT), Developer),
        item("Inventory", "/dev/inventory", Some(features::DEV_INVENTORY_MANAGEMENT), Developer),
        item("Roles", "/dev/roles", Some(features::DEV_ROLE_MANAGEMENT), Developer),
        item("Users", "/dev/users", Some(features::DEV_USER_MANAGEMENT), Developer),
        item("Departments", "/dev/departments", Some(features::DEV_DEPARTMENT_MANAGEMENT), Developer),
        item("Features", "/dev/features", Some(features::DEV_FEATURE_MANAGEMENT), Developer),
    ]
}
