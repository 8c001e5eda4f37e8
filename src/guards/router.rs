//! Route table resolution
//!
//! Composes the authentication gate with the feature gate for every
//! configured view.

use super::render::ConditionalRenderGuard;
use super::route::RouteGuard;
use crate::auth::rbac::PermissionSet;
use crate::auth::session::AuthState;
use crate::config::{RouteConfig, RoutingConfig};
use std::collections::HashMap;
use tracing::debug;

/// Result of navigating to a path
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome<'a> {
    /// Mount the view
    Render(&'a RouteConfig),
    /// Navigate to another path instead
    Redirect(&'a str),
    /// Signed in, but the feature permission is missing
    Forbidden(&'a RouteConfig),
    /// No such view
    NotFound,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routing: RoutingConfig,
    index: HashMap<String, usize>,
}

impl RouteTable {
    pub fn new(routing: RoutingConfig) -> Self {
        let index = routing
            .routes
            .iter()
            .enumerate()
            .map(|(i, route)| (normalize_path(&route.path).to_string(), i))
            .collect();
        Self { routing, index }
    }

    pub fn routing(&self) -> &RoutingConfig {
        &self.routing
    }

    pub fn get(&self, path: &str) -> Option<&RouteConfig> {
        self.index
            .get(normalize_path(path))
            .map(|&i| &self.routing.routes[i])
    }

    /// Authentication first, then the feature permission
    pub fn resolve(
        &self,
        path: &str,
        auth: AuthState,
        permission_set: Option<&PermissionSet>,
    ) -> RouteOutcome<'_> {
        let Some(route) = self.get(path) else {
            debug!(path, "No route configured");
            return RouteOutcome::NotFound;
        };

        let decision = RouteGuard::new(route.require_auth).evaluate(auth);
        if let Some(target) = decision.redirect_target(&self.routing) {
            return RouteOutcome::Redirect(target);
        }

        let guard = ConditionalRenderGuard::new(route.feature.as_deref()).permission(route.permission);
        if guard.allows(permission_set) {
            RouteOutcome::Render(route)
        } else {
            debug!(path, feature = ?route.feature, "Route forbidden");
            RouteOutcome::Forbidden(route)
        }
    }
}

/// `/tenders/` and `/tenders` are the same view; `/` stays `/`
fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
