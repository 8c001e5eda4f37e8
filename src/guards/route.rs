//! Authentication gate for views

use crate::auth::session::AuthState;
use crate::config::RoutingConfig;
use tracing::debug;

/// What to do with a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Mount the guarded view unchanged
    Render,
    /// Send the user to the login view; the guarded view never mounts
    RedirectToLogin,
    /// Send an authenticated user away from a public-only view
    RedirectToHome,
}

impl RouteDecision {
    /// Configured path to navigate to, if this is a redirect
    pub fn redirect_target<'a>(&self, routing: &'a RoutingConfig) -> Option<&'a str> {
        match self {
            RouteDecision::Render => None,
            RouteDecision::RedirectToLogin => Some(routing.login_path.as_str()),
            RouteDecision::RedirectToHome => Some(routing.home_path.as_str()),
        }
    }
}

/// Gate on whether the user is signed in.
///
/// Stateless; evaluate it on every navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    require_auth: bool,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::protected()
    }
}

impl RouteGuard {
    pub fn new(require_auth: bool) -> Self {
        Self { require_auth }
    }

    /// Views that need a signed-in user
    pub fn protected() -> Self {
        Self::new(true)
    }

    /// Views only signed-out users should see, such as login
    pub fn public_only() -> Self {
        Self::new(false)
    }

    pub fn require_auth(&self) -> bool {
        self.require_auth
    }

    pub fn evaluate(&self, auth: AuthState) -> RouteDecision {
        let decision = match (self.require_auth, auth.is_authenticated()) {
            (true, false) => RouteDecision::RedirectToLogin,
            (false, true) => RouteDecision::RedirectToHome,
            _ => RouteDecision::Render,
        };
        debug!(require_auth = self.require_auth, ?decision, "Route guard evaluated");
        decision
    }
}
