//! Dashboard Model
//!
//! All counts and rankings arrive precomputed from `GET /api/dashboard`;
//! the client performs no aggregation of its own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::client::UserInfo;

/// Top-employee ranking row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopEmployee {
    pub id: i64,
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub rating: Decimal,
    #[serde(default)]
    pub jobs_done: i64,
}

/// Precomputed dashboard statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub customers_count: i64,
    pub vehicles_count: i64,
    pub pending_requests: i64,
    pub active_jobs: i64,
    pub low_stock_items: i64,
    pub unpaid_total: Decimal,
    pub total_revenue: Decimal,
    #[serde(default)]
    pub top_employees: Vec<TopEmployee>,
}

/// `GET /api/dashboard` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub user: Option<UserInfo>,
    pub stats: DashboardStats,
}
