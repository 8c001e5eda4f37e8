//! Guards fed from a live session

use crate::common::{PermissionSetFactory, SessionFactory};
use coordhub_access::auth::rbac::{FeatureScope, PermissionType, features};
use coordhub_access::config::{NavigationConfig, RoutingConfig};
use coordhub_access::guards::{
    ConditionalRenderGuard, NavMenu, PermissionAwareControl, RouteDecision, RouteGuard,
    RouteOutcome, RouteTable,
};
use std::cell::RefCell;

#[test]
fn test_route_guard_follows_session() {
    let session = SessionFactory::anonymous();
    assert_eq!(
        RouteGuard::protected().evaluate(session.auth_state()),
        RouteDecision::RedirectToLogin
    );
    assert_eq!(
        RouteGuard::public_only().evaluate(session.auth_state()),
        RouteDecision::Render
    );

    session
        .login("t", &serde_json::json!({}), PermissionSetFactory::tender_viewer())
        .unwrap();
    assert_eq!(
        RouteGuard::protected().evaluate(session.auth_state()),
        RouteDecision::Render
    );
    assert_eq!(
        RouteGuard::public_only().evaluate(session.auth_state()),
        RouteDecision::RedirectToHome
    );
}

#[test]
fn test_render_guard_with_session_permissions() {
    let session = SessionFactory::logged_in(PermissionSetFactory::tender_viewer());
    let current = session.current_permissions();

    let page = ConditionalRenderGuard::for_feature(features::TENDER_MANAGEMENT)
        .render_or(current.as_deref(), || "tender list", || "no access");
    assert_eq!(page, "tender list");

    let page = ConditionalRenderGuard::for_feature(features::ROLE_MANAGEMENT)
        .render_or(current.as_deref(), || "role list", || "no access");
    assert_eq!(page, "no access");
}

fn record<'a>(log: &'a RefCell<Vec<&'static str>>, name: &'static str) -> Box<dyn Fn() + 'a> {
    Box::new(move || log.borrow_mut().push(name))
}

#[test]
fn test_toolbar_controls() {
    let log = RefCell::new(Vec::new());
    let session = SessionFactory::logged_in(PermissionSetFactory::tender_viewer());
    let current = session.current_permissions();

    let toolbar = [
        PermissionAwareControl::new("Open", record(&log, "open"))
            .feature(features::TENDER_MANAGEMENT),
        PermissionAwareControl::new("Edit", record(&log, "edit"))
            .feature(features::TENDER_MANAGEMENT)
            .permission(PermissionType::Update),
        PermissionAwareControl::new("Delete", record(&log, "delete"))
            .feature(features::TENDER_MANAGEMENT)
            .permission(PermissionType::Delete)
            .hide_if_no_permission(true),
    ];

    let rendered: Vec<_> = toolbar
        .iter()
        .filter_map(|control| control.render(current.as_deref()))
        .collect();

    let labels: Vec<_> = rendered.iter().map(|c| (c.label(), c.is_disabled())).collect();
    assert_eq!(labels, vec![("Open", false), ("Edit", true)]);

    for control in &rendered {
        control.click();
    }
    assert_eq!(*log.borrow(), vec!["open"]);
}

#[test]
fn test_navigation_after_logout() {
    let session = SessionFactory::logged_in(PermissionSetFactory::department_admin());
    let menu = NavMenu::from_config(&NavigationConfig::default());

    let before = menu
        .visible_items(session.current_permissions().as_deref(), Some(FeatureScope::Department))
        .len();
    assert_eq!(before, 7);

    session.logout().unwrap();
    let after = menu.visible_items(session.current_permissions().as_deref(), Some(FeatureScope::Department));
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].path, "/");
}

#[test]
fn test_route_table_with_session() {
    let table = RouteTable::new(RoutingConfig::default());
    let session = SessionFactory::anonymous();

    assert_eq!(
        table.resolve("/users", session.auth_state(), session.current_permissions().as_deref()),
        RouteOutcome::Redirect("/login")
    );

    session
        .login("t", &serde_json::json!({}), PermissionSetFactory::department_admin())
        .unwrap();
    let current = session.current_permissions();
    assert!(matches!(
        table.resolve("/users", session.auth_state(), current.as_deref()),
        RouteOutcome::Render(_)
    ));
    assert!(matches!(
        table.resolve("/dev/users", session.auth_state(), current.as_deref()),
        RouteOutcome::Forbidden(_)
    ));
    assert_eq!(
        table.resolve("/login", session.auth_state(), current.as_deref()),
        RouteOutcome::Redirect("/")
    );
}
