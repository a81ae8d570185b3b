//! Billing screen controller

use std::sync::Arc;

use autoims_client::HttpClient;
use shared::models::{Bill, GenerateBillRequest, PendingJob};

use crate::guard::{Guarded, SessionGuard};
use crate::views::{ListState, Notice};

/// View state of the billing screen
pub struct BillingView {
    http: HttpClient,
    guard: Arc<SessionGuard>,
    pub bills: ListState<Bill>,
    /// Completed jobs still awaiting a bill
    pub pending_jobs: Vec<PendingJob>,
    /// Bill opened in the detail pane
    pub selected: Option<Bill>,
    pub notice: Notice,
}

impl BillingView {
    pub fn new(http: HttpClient, guard: Arc<SessionGuard>) -> Self {
        Self {
            http,
            guard,
            bills: ListState::new(),
            pending_jobs: Vec::new(),
            selected: None,
            notice: Notice::new(),
        }
    }

    pub async fn load(&mut self) {
        let Some(client) = self.guard.authorized(&self.http) else {
            return;
        };
        let generation = self.bills.begin_fetch();
        match self.guard.absorb(client.list_bills().await) {
            Guarded::Ok(items) => {
                self.bills.finish_fetch(generation, Ok(items));
            }
            Guarded::RedirectedToLogin => {}
            Guarded::Failed(error) => {
                self.bills.finish_fetch(generation, Err(error.to_string()));
            }
        }
    }

    pub async fn load_pending_jobs(&mut self) {
        let Some(client) = self.guard.authorized(&self.http) else {
            return;
        };
        match self.guard.absorb(client.pending_billing_jobs().await) {
            Guarded::Ok(jobs) => {
                self.pending_jobs = jobs;
            }
            Guarded::RedirectedToLogin => {}
            Guarded::Failed(error) => {
                self.notice.error(error.to_string());
            }
        }
    }

    /// Generate the bill for a completed job; the new bill joins the list
    /// and the job leaves the pending queue.
    pub async fn generate(&mut self, job_id: i64) -> bool {
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        let request = GenerateBillRequest { job_id };
        match self.guard.absorb(client.generate_bill(&request).await) {
            Guarded::Ok(bill) => {
                self.bills.append(bill);
                self.pending_jobs.retain(|job| job.job_id != job_id);
                true
            }
            Guarded::RedirectedToLogin => false,
            Guarded::Failed(error) => {
                self.notice.error(error.to_string());
                false
            }
        }
    }

    /// Open the bill attached to a job in the detail pane
    pub async fn open_for_job(&mut self, job_id: i64) -> bool {
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        match self.guard.absorb(client.bill_for_job(job_id).await) {
            Guarded::Ok(bill) => {
                self.selected = Some(bill);
                true
            }
            Guarded::RedirectedToLogin => false,
            Guarded::Failed(error) => {
                self.notice.error(error.to_string());
                false
            }
        }
    }

    /// Mark a bill paid; the canonical updated bill replaces the cached row
    pub async fn mark_paid(&mut self, bill_id: i64) -> bool {
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        match self.guard.absorb(client.mark_bill_paid(bill_id).await) {
            Guarded::Ok(updated) => {
                if self.selected.as_ref().is_some_and(|bill| bill.id == bill_id) {
                    self.selected = Some(updated.clone());
                }
                self.bills.replace(updated);
                true
            }
            Guarded::RedirectedToLogin => false,
            Guarded::Failed(error) => {
                self.notice.error(error.to_string());
                false
            }
        }
    }
}
