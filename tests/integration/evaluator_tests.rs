//! Permission evaluation through the public API

use crate::common::PermissionSetFactory;
use crate::common::assertions::{assert_denied_everything, assert_grants};
use coordhub_access::auth::rbac::features;
use coordhub_access::{
    PermissionSet, PermissionType, can_render, create_permission_checker, has_permission,
    has_permission_named,
};

#[test]
fn test_fail_closed_without_data() {
    assert!(!has_permission(None, "ANY", PermissionType::Read));
    assert!(!has_permission(Some(&PermissionSet::default()), "ANY", PermissionType::Read));
    assert_denied_everything(None, features::TENDER_MANAGEMENT);
}

#[test]
fn test_viewer_grants() {
    let set = PermissionSetFactory::tender_viewer();
    assert_grants(Some(&set), features::TENDER_MANAGEMENT, &[PermissionType::Read]);
    assert_denied_everything(Some(&set), features::DEV_TENDER_MANAGEMENT);
}

#[test]
fn test_union_across_roles() {
    let set = PermissionSetFactory::split_clash_roles();
    assert_grants(
        Some(&set),
        features::CLASH_MANAGEMENT,
        &[PermissionType::Read, PermissionType::Write],
    );
}

#[test]
fn test_wire_payload() {
    let set = PermissionSet::from_json(PermissionSetFactory::wire_payload()).unwrap();

    assert_grants(
        Some(&set),
        features::INVENTORY_MANAGEMENT,
        &[PermissionType::Read, PermissionType::Write],
    );
    assert_grants(Some(&set), features::DEV_FEATURE_MANAGEMENT, &PermissionType::ALL);
    assert_denied_everything(Some(&set), features::TENDER_MANAGEMENT);
}

#[test]
fn test_unrecognized_permission_never_grants() {
    let set = PermissionSetFactory::department_admin();
    for feature in [features::TENDER_MANAGEMENT, features::USER_MANAGEMENT] {
        assert!(has_permission_named(Some(&set), feature, "write"));
        assert!(!has_permission_named(Some(&set), feature, "execute"));
        assert!(!has_permission_named(Some(&set), feature, "approve"));
    }
}

#[test]
fn test_helpers_agree_with_has_permission() {
    let sets = [
        None,
        Some(PermissionSet::default()),
        Some(PermissionSetFactory::tender_viewer()),
        Some(PermissionSetFactory::department_admin()),
        Some(PermissionSetFactory::split_clash_roles()),
    ];

    for feature in [features::TENDER_MANAGEMENT, features::CLASH_MANAGEMENT, "UNKNOWN"] {
        let checker = create_permission_checker(feature);
        for set in &sets {
            let set = set.as_ref();
            assert_eq!(
                can_render(set, feature, None),
                has_permission(set, feature, PermissionType::Read)
            );
            for permission in PermissionType::ALL {
                assert_eq!(
                    checker.check(set, Some(permission)),
                    has_permission(set, feature, permission)
                );
            }
        }
    }
}
