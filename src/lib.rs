//! # coordhub-access
//!
//! Permission evaluation and route/component gating for the coordination hub
//! administrative dashboard (tenders, inter-department clashes, inventory,
//! user/role/feature management).
//!
//! ## Features
//!
//! - **Fail-closed evaluation**: missing or empty permission data denies
//! - **Additive roles**: a grant from any role is enough
//! - **Guards**: route, conditional-render and permission-aware controls
//! - **Sessions**: token, user record and permission set over pluggable storage
//!
//! ## Quick Start
//!
//! ```rust
//! use coordhub_access::auth::rbac::{
//!     FeaturePermissions, PermissionSet, PermissionType, Role, features, has_permission,
//! };
//!
//! let permissions = PermissionSet::new(vec![
//!     Role::new("r-1", "Tender Officer")
//!         .with_grant(features::TENDER_MANAGEMENT, FeaturePermissions::read_only()),
//! ]);
//!
//! assert!(has_permission(Some(&permissions), features::TENDER_MANAGEMENT, PermissionType::Read));
//! assert!(!has_permission(Some(&permissions), features::TENDER_MANAGEMENT, PermissionType::Write));
//! assert!(!has_permission(None, features::TENDER_MANAGEMENT, PermissionType::Read));
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod guards;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    PermissionChecker, PermissionSet, PermissionType, can_render, create_permission_checker,
    has_permission, has_permission_named,
};
pub use auth::session::{AuthState, Session};
pub use config::Config;
pub use guards::{
    ConditionalRenderGuard, NavMenu, PermissionAwareControl, RouteDecision, RouteGuard,
    RouteOutcome, RouteTable,
};
pub use utils::error::{AccessError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
