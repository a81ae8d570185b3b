//! Billing Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bill payment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
}

/// One part consumed against the billed job, priced at time of use
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillPart {
    pub part_id: i64,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
}

/// Bill entity
///
/// Totals are computed server-side; the client never aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: i64,
    pub job_id: i64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub plate_no: String,
    #[serde(default)]
    pub parts: Vec<BillPart>,
    pub parts_subtotal: Decimal,
    pub labor_subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub bill_date: Option<DateTime<Utc>>,
}

/// Row of `GET /api/jobs?pending_billing=true`: a completed job with no
/// bill generated yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingJob {
    pub job_id: i64,
    pub service_type: String,
    #[serde(default)]
    pub plate_no: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub labor_charge: Decimal,
}

/// Generate a bill for a completed job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateBillRequest {
    pub job_id: i64,
}
