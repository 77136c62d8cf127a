// Role-gated navigation: the guard decides, a Navigator carries it out.

use std::sync::Arc;

use crate::config;
use crate::session::store::SessionStore;

/// Receiver of redirect requests from the guard and the 401/403 handler.
///
/// The web dashboard routed with its router; here the embedder decides what a
/// route path means (the CLI prints a hint, tests record the path).
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator that only logs. Useful as a default for embedders that have no
/// navigation concept.
#[derive(Debug, Default)]
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "navigation requested");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectTo(String),
}

/// Synchronous, network-free gate evaluated once per navigation attempt.
pub struct RouteGuard {
    session: Arc<SessionStore>,
    login_route: String,
    root_route: String,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionStore>) -> Self {
        let routes = &config::config().routes;
        Self::with_routes(session, &routes.login, &routes.root)
    }

    pub fn with_routes(session: Arc<SessionStore>, login_route: &str, root_route: &str) -> Self {
        Self {
            session,
            login_route: login_route.to_string(),
            root_route: root_route.to_string(),
        }
    }

    /// Not logged in redirects to login; logged in but missing every required
    /// role redirects to the application root; otherwise allow.
    pub fn can_activate(&self, required_roles: &[&str]) -> GuardDecision {
        if !self.session.is_logged_in() {
            return GuardDecision::RedirectTo(self.login_route.clone());
        }

        if !self.session.has_any_role(required_roles) {
            return GuardDecision::RedirectTo(self.root_route.clone());
        }

        GuardDecision::Allow
    }
}
