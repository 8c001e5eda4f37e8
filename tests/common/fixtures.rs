//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use coordhub_access::auth::rbac::{FeaturePermissions, PermissionSet, Role, features};
use coordhub_access::auth::session::{MemoryStore, Session};
use coordhub_access::config::SessionConfig;
use serde_json::json;
use std::sync::Arc;

/// Factory for permission sets shaped like the dashboard's roles
pub struct PermissionSetFactory;

impl PermissionSetFactory {
    /// Read-only tender access
    pub fn tender_viewer() -> PermissionSet {
        PermissionSet::new(vec![
            Role::new("role-viewer", "Tender Viewer")
                .with_grant(features::TENDER_MANAGEMENT, FeaturePermissions::read_only()),
        ])
    }

    /// Full department administration
    pub fn department_admin() -> PermissionSet {
        let role = [
            features::TENDER_MANAGEMENT,
            features::CLASH_MANAGEMENT,
            features::INVENTORY_MANAGEMENT,
            features::ROLE_MANAGEMENT,
            features::USER_MANAGEMENT,
            features::DEPARTMENT_MANAGEMENT,
        ]
        .into_iter()
        .fold(Role::new("role-admin", "Department Admin"), |role, feature| {
            role.with_grant(feature, FeaturePermissions::all())
        });
        PermissionSet::new(vec![role])
    }

    /// Two roles that only together grant read and write on clashes
    pub fn split_clash_roles() -> PermissionSet {
        PermissionSet::new(vec![
            Role::new("role-a", "Clash Reader")
                .with_grant(features::CLASH_MANAGEMENT, FeaturePermissions::read_only()),
            Role::new("role-b", "Clash Writer").with_grant(
                features::CLASH_MANAGEMENT,
                FeaturePermissions {
                    write: true,
                    ..FeaturePermissions::default()
                },
            ),
        ])
    }

    /// JSON payload as the auth API returns it
    pub fn wire_payload() -> &'static str {
        r#"{
            "roles": [
                {
                    "roleId": "64f0c2",
                    "roleName": "Inventory Clerk",
                    "features": [
                        {
                            "featureId": "INVENTORY_MANAGEMENT",
                            "permissions": {"read": true, "write": true, "update": false, "delete": false}
                        }
                    ]
                },
                {
                    "roleId": "64f0c3",
                    "roleName": "Developer",
                    "features": [
                        {
                            "featureId": "DEV_FEATURE_MANAGEMENT",
                            "permissions": {"read": true, "write": true, "update": true, "delete": true}
                        }
                    ]
                }
            ]
        }"#
    }
}

/// Factory for in-memory sessions
pub struct SessionFactory;

impl SessionFactory {
    pub fn anonymous() -> Session<Arc<MemoryStore>> {
        Session::new(SessionConfig::default(), Arc::new(MemoryStore::new()))
    }

    pub fn logged_in(permissions: PermissionSet) -> Session<Arc<MemoryStore>> {
        let session = Self::anonymous();
        session
            .login("test-token", &json!({"id": "u-1", "name": "Test User"}), permissions)
            .expect("login into memory store");
        session
    }
}
