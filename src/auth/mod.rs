//! Authentication and authorization
//!
//! `rbac` answers feature/permission questions; `session` supplies the
//! permission set and the authentication state those questions run against.

pub mod rbac;
pub mod session;

// Re-export commonly used types
pub use rbac::{
    FeatureGrant, FeaturePermissions, PermissionChecker, PermissionSet, PermissionType, Role,
    can_render, create_permission_checker, has_permission, has_permission_named,
};
pub use session::{AuthState, FileStore, MemoryStore, Session, SessionStore};
