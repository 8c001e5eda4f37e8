//! Configuration driving the guards

use crate::common::PermissionSetFactory;
use coordhub_access::auth::session::AuthState;
use coordhub_access::config::Config;
use coordhub_access::guards::{NavMenu, RouteOutcome, RouteTable};
use std::io::Write;
use tempfile::NamedTempFile;

const CONFIG: &str = r#"
routing:
  login_path: "/auth/login"
  home_path: "/home"
  routes:
    - path: "/auth/login"
      require_auth: false
    - path: "/home"
    - path: "/tenders/approve"
      feature: "TENDER_MANAGEMENT"
      permission: update
navigation:
  items:
    - label: "Home"
      path: "/home"
    - label: "Tenders"
      path: "/tenders/approve"
      feature: "TENDER_MANAGEMENT"
"#;

fn load() -> Config {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();
    Config::from_file(file.path()).unwrap()
}

#[test]
fn test_custom_redirect_paths() {
    let config = load();
    let table = RouteTable::new(config.routing().clone());

    assert_eq!(
        table.resolve("/home", AuthState::anonymous(), None),
        RouteOutcome::Redirect("/auth/login")
    );

    let set = PermissionSetFactory::tender_viewer();
    assert_eq!(
        table.resolve("/auth/login", AuthState::authenticated(), Some(&set)),
        RouteOutcome::Redirect("/home")
    );
    assert!(matches!(
        table.resolve("/tenders/approve", AuthState::authenticated(), Some(&set)),
        RouteOutcome::Forbidden(_)
    ));

    let admin = PermissionSetFactory::department_admin();
    assert!(matches!(
        table.resolve("/tenders/approve", AuthState::authenticated(), Some(&admin)),
        RouteOutcome::Render(_)
    ));
}

#[test]
fn test_configured_navigation() {
    let config = load();
    let menu = NavMenu::from_config(config.navigation());
    let set = PermissionSetFactory::tender_viewer();

    assert_eq!(menu.visible_items(None, None).len(), 1);
    assert_eq!(menu.visible_items(Some(&set), None).len(), 2);
}

#[test]
fn test_invalid_config_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"routing:\n  login_path: \"/\"\n").unwrap();
    assert!(Config::from_file(file.path()).is_err());
}
