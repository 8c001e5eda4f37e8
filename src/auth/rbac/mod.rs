//! Role-Based Access Control (RBAC) evaluation
//!
//! Roles map features to CRUD flags; a user may hold several roles and the
//! grants are unioned.

mod evaluator;
pub mod features;
mod types;

// Re-export public types and functions
pub use evaluator::{
    PermissionChecker, accessible_features, can_render, create_permission_checker,
    effective_permissions, explain_permission, has_permission, has_permission_named,
};
pub use features::{FeatureInfo, FeatureScope};
pub use types::{FeatureGrant, FeaturePermissions, PermissionCheck, PermissionSet, PermissionType, Role};
