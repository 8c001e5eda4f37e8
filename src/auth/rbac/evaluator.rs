//! Permission evaluation
//!
//! Pure checks over a [`PermissionSet`]. Every function fails closed: a
//! missing set, an empty role list, an unknown feature or an unknown
//! permission name all answer `false`.

use super::types::{FeaturePermissions, PermissionCheck, PermissionSet, PermissionType};
use std::str::FromStr;
use tracing::trace;

/// Whether any role in `permission_set` grants `permission` on `feature_id`.
///
/// Roles are additive: one granting role is enough, and the scan stops there.
pub fn has_permission(
    permission_set: Option<&PermissionSet>,
    feature_id: &str,
    permission: PermissionType,
) -> bool {
    let Some(set) = permission_set else {
        trace!(feature = feature_id, "No permission set loaded");
        return false;
    };

    set.roles.iter().any(|role| {
        role.features
            .iter()
            .any(|grant| grant.feature_id == feature_id && grant.permissions.allows(permission))
    })
}

/// [`has_permission`] for a permission type given by name.
///
/// Names other than `read`, `write`, `update` and `delete` never grant.
pub fn has_permission_named(
    permission_set: Option<&PermissionSet>,
    feature_id: &str,
    permission: &str,
) -> bool {
    match PermissionType::from_str(permission) {
        Ok(permission) => has_permission(permission_set, feature_id, permission),
        Err(_) => {
            trace!(feature = feature_id, permission, "Unrecognized permission type");
            false
        }
    }
}

/// Visibility check; `None` means `read`.
pub fn can_render(
    permission_set: Option<&PermissionSet>,
    feature_id: &str,
    permission: Option<PermissionType>,
) -> bool {
    has_permission(permission_set, feature_id, permission.unwrap_or_default())
}

/// Reusable predicate bound to one feature
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PermissionChecker {
    feature_id: String,
}

impl PermissionChecker {
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    /// Check `permission` (default `read`) against the bound feature
    pub fn check(
        &self,
        permission_set: Option<&PermissionSet>,
        permission: Option<PermissionType>,
    ) -> bool {
        can_render(permission_set, &self.feature_id, permission)
    }

    pub fn can_read(&self, permission_set: Option<&PermissionSet>) -> bool {
        self.check(permission_set, Some(PermissionType::Read))
    }

    pub fn can_write(&self, permission_set: Option<&PermissionSet>) -> bool {
        self.check(permission_set, Some(PermissionType::Write))
    }

    pub fn can_update(&self, permission_set: Option<&PermissionSet>) -> bool {
        self.check(permission_set, Some(PermissionType::Update))
    }

    pub fn can_delete(&self, permission_set: Option<&PermissionSet>) -> bool {
        self.check(permission_set, Some(PermissionType::Delete))
    }
}

/// Bind `feature_id` once and check it many times
pub fn create_permission_checker(feature_id: impl Into<String>) -> PermissionChecker {
    PermissionChecker {
        feature_id: feature_id.into(),
    }
}

/// Detailed permission check listing every granting role
pub fn explain_permission(
    permission_set: Option<&PermissionSet>,
    feature_id: &str,
    permission: PermissionType,
) -> PermissionCheck {
    let granted_by_roles: Vec<String> = permission_set
        .map(|set| {
            set.roles
                .iter()
                .filter(|role| {
                    role.features.iter().any(|grant| {
                        grant.feature_id == feature_id && grant.permissions.allows(permission)
                    })
                })
                .map(|role| role.role_id.clone())
                .collect()
        })
        .unwrap_or_default();

    if !granted_by_roles.is_empty() {
        return PermissionCheck {
            granted: true,
            granted_by_roles,
            denial_reason: None,
        };
    }

    let denial_reason = match permission_set {
        None => "No permissions loaded".to_string(),
        Some(set) if set.is_empty() => "User holds no roles".to_string(),
        Some(_) => format!("Missing permission: {}.{}", feature_id, permission),
    };

    PermissionCheck {
        granted: false,
        granted_by_roles,
        denial_reason: Some(denial_reason),
    }
}

/// Union of the flags every role grants on `feature_id`
pub fn effective_permissions(
    permission_set: Option<&PermissionSet>,
    feature_id: &str,
) -> FeaturePermissions {
    permission_set
        .into_iter()
        .flat_map(|set| set.roles.iter())
        .flat_map(|role| role.features.iter())
        .filter(|grant| grant.feature_id == feature_id)
        .fold(FeaturePermissions::default(), |acc, grant| {
            acc.union(grant.permissions)
        })
}

/// Feature ids on which the user holds at least one flag, sorted
pub fn accessible_features(permission_set: Option<&PermissionSet>) -> Vec<String> {
    let mut features: Vec<String> = permission_set
        .into_iter()
        .flat_map(|set| set.roles.iter())
        .flat_map(|role| role.features.iter())
        .filter(|grant| !grant.permissions.is_empty())
        .map(|grant| grant.feature_id.clone())
        .collect();
    features.sort();
    features.dedup();
    features
}
