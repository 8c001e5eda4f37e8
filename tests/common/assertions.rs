//! Custom assertions

use coordhub_access::auth::rbac::{PermissionSet, PermissionType, has_permission};

/// Assert the exact set of granted permission types on `feature`
pub fn assert_grants(set: Option<&PermissionSet>, feature: &str, expected: &[PermissionType]) {
    for permission in PermissionType::ALL {
        let granted = has_permission(set, feature, permission);
        assert_eq!(
            granted,
            expected.contains(&permission),
            "{feature}.{permission}: expected granted={}",
            expected.contains(&permission)
        );
    }
}

/// Assert nothing at all is granted on `feature`
pub fn assert_denied_everything(set: Option<&PermissionSet>, feature: &str) {
    assert_grants(set, feature, &[]);
}
