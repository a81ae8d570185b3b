//! Dashboard screen controller
//!
//! A read-only fetch of precomputed aggregates. The only refresh trigger
//! besides mount is window focus; there is no cross-view invalidation.

use std::sync::Arc;

use autoims_client::{HttpClient, UserInfo};
use shared::models::DashboardStats;

use crate::guard::{Guarded, SessionGuard};
use crate::views::LoadPhase;

/// View state of the dashboard screen
pub struct DashboardView {
    http: HttpClient,
    guard: Arc<SessionGuard>,
    pub stats: Option<DashboardStats>,
    pub user: Option<UserInfo>,
    pub phase: LoadPhase,
}

impl DashboardView {
    pub fn new(http: HttpClient, guard: Arc<SessionGuard>) -> Self {
        Self {
            http,
            guard,
            stats: None,
            user: None,
            phase: LoadPhase::Idle,
        }
    }

    pub async fn fetch(&mut self) {
        let Some(client) = self.guard.authorized(&self.http) else {
            return;
        };
        self.phase = LoadPhase::Loading;
        match self.guard.absorb(client.fetch_dashboard().await) {
            Guarded::Ok(response) => {
                self.stats = Some(response.stats);
                self.user = response.user;
                self.phase = LoadPhase::Loaded;
            }
            Guarded::RedirectedToLogin => {
                self.phase = LoadPhase::Idle;
            }
            Guarded::Failed(error) => {
                self.phase = LoadPhase::Failed(error.to_string());
            }
        }
    }

    /// Window regained focus: re-trigger the fetch
    pub async fn on_focus(&mut self) {
        self.fetch().await;
    }

    /// The inline error message, when the last fetch failed
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
