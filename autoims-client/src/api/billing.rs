//! Billing API

use shared::models::{Bill, GenerateBillRequest, PendingJob};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List all bills
    pub async fn list_bills(&self) -> ClientResult<Vec<Bill>> {
        self.get("/api/billing").await
    }

    /// Completed jobs that have no bill yet
    pub async fn pending_billing_jobs(&self) -> ClientResult<Vec<PendingJob>> {
        self.get("/api/jobs?pending_billing=true").await
    }

    /// Ask the backend to generate a bill for a completed job
    pub async fn generate_bill(&self, request: &GenerateBillRequest) -> ClientResult<Bill> {
        self.post("/api/billing/generate", request).await
    }

    /// Get the bill attached to a job
    pub async fn bill_for_job(&self, job_id: i64) -> ClientResult<Bill> {
        self.get(&format!("/api/billing/job/{job_id}")).await
    }

    /// Mark a bill paid, returning the canonical updated bill
    pub async fn mark_bill_paid(&self, bill_id: i64) -> ClientResult<Bill> {
        self.put_empty(&format!("/api/billing/{bill_id}/pay")).await
    }
}
