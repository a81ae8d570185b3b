//! Navigation collaborators
//!
//! The guard never navigates directly; it calls the injected [`Navigator`]
//! so tests can observe redirects and the host shell can route however it
//! likes.

use std::sync::Mutex;

/// Console routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Employees,
    Inventory,
    ServiceRequests,
    Billing,
}

/// Redirect collaborator injected into the session guard
pub trait Navigator: Send + Sync {
    fn redirect(&self, route: Route);
}

/// Navigator that only logs; used by the CLI driver where there is no
/// routing shell to hand off to.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn redirect(&self, route: Route) {
        tracing::info!(?route, "redirect requested");
    }
}

/// Navigator that records every redirect (test double)
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All redirects issued so far, in order
    pub fn redirects(&self) -> Vec<Route> {
        self.routes.lock().expect("navigator lock poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, route: Route) {
        self.routes
            .lock()
            .expect("navigator lock poisoned")
            .push(route);
    }
}
