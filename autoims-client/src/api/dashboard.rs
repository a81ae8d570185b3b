//! Dashboard API

use shared::models::DashboardResponse;

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Fetch the precomputed dashboard aggregates
    pub async fn fetch_dashboard(&self) -> ClientResult<DashboardResponse> {
        self.get("/api/dashboard").await
    }
}
