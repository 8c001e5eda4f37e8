//! Sidebar filtering
//!
//! One implementation for both the department and developer sidebars.

use super::render::ConditionalRenderGuard;
use crate::auth::rbac::{FeatureScope, PermissionSet};
use crate::config::{NavItemConfig, NavigationConfig};

#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    items: Vec<NavItemConfig>,
}

impl NavMenu {
    pub fn new(items: Vec<NavItemConfig>) -> Self {
        Self { items }
    }

    pub fn from_config(config: &NavigationConfig) -> Self {
        Self::new(config.items.clone())
    }

    pub fn items(&self) -> &[NavItemConfig] {
        &self.items
    }

    /// Entries the user may see, in configured order.
    ///
    /// With a `scope`, entries tagged for the other sidebar are skipped;
    /// untagged entries appear everywhere.
    pub fn visible_items(
        &self,
        permission_set: Option<&PermissionSet>,
        scope: Option<FeatureScope>,
    ) -> Vec<&NavItemConfig> {
        self.items
            .iter()
            .filter(|item| match (scope, item.scope) {
                (Some(wanted), Some(actual)) => wanted == actual,
                _ => true,
            })
            .filter(|item| {
                ConditionalRenderGuard::new(item.feature.as_deref()).allows(permission_set)
            })
            .collect()
    }
}
