//! Service request screen controller

use std::sync::Arc;

use autoims_client::{ClientError, HttpClient};
use rust_decimal::Decimal;
use shared::models::{ServiceRequest, ServiceRequestCreate, ServiceRequestUpdate};
use validator::Validate;

use crate::guard::{Guarded, SessionGuard};
use crate::views::{ListState, Notice, PopupState};

/// View state of the service request screen
pub struct ServiceRequestView {
    http: HttpClient,
    guard: Arc<SessionGuard>,
    pub list: ListState<ServiceRequest>,
    pub popup: PopupState<ServiceRequest>,
    pub notice: Notice,
    /// Embed assigned employee records in the fetched rows
    pub include_employees: bool,
}

impl ServiceRequestView {
    pub fn new(http: HttpClient, guard: Arc<SessionGuard>) -> Self {
        Self {
            http,
            guard,
            list: ListState::new(),
            popup: PopupState::default(),
            notice: Notice::new(),
            include_employees: false,
        }
    }

    pub async fn load(&mut self) {
        let Some(client) = self.guard.authorized(&self.http) else {
            return;
        };
        let generation = self.list.begin_fetch();
        match self
            .guard
            .absorb(client.list_service_requests(self.include_employees).await)
        {
            Guarded::Ok(items) => {
                self.list.finish_fetch(generation, Ok(items));
            }
            Guarded::RedirectedToLogin => {}
            Guarded::Failed(error) => {
                self.list.finish_fetch(generation, Err(error.to_string()));
            }
        }
    }

    pub fn open_add(&mut self) {
        self.popup.open_add();
    }

    pub fn open_edit(&mut self, id: i64) {
        if let Some(request) = self.list.get(id) {
            self.popup.open_edit(request.clone());
        }
    }

    pub fn close_popup(&mut self) {
        self.popup.close();
    }

    pub async fn submit_add(&mut self, payload: ServiceRequestCreate) -> bool {
        if let Err(errors) = payload.validate() {
            self.notice.error(ClientError::from(errors).to_string());
            return false;
        }
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        match self
            .guard
            .absorb(client.create_service_request(&payload).await)
        {
            Guarded::Ok(created) => {
                self.list.append(created);
                self.popup.close();
                true
            }
            Guarded::RedirectedToLogin => false,
            Guarded::Failed(error) => {
                self.notice.error(error.to_string());
                false
            }
        }
    }

    pub async fn submit_edit(&mut self, id: i64, payload: ServiceRequestUpdate) -> bool {
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        match self
            .guard
            .absorb(client.update_service_request(id, &payload).await)
        {
            Guarded::Ok(updated) => {
                self.list.replace(updated);
                self.popup.close();
                true
            }
            Guarded::RedirectedToLogin => false,
            Guarded::Failed(error) => {
                self.notice.error(error.to_string());
                false
            }
        }
    }

    /// Assign an employee to a request
    pub async fn assign(&mut self, id: i64, employee_id: i64) -> bool {
        let update = ServiceRequestUpdate {
            assigned_employee_id: Some(employee_id),
            ..Default::default()
        };
        self.submit_edit(id, update).await
    }

    /// Complete a request. The labor charge rides along so the backend can
    /// generate the job's bill; no other transition ever sends it.
    pub async fn complete(&mut self, id: i64, labor_charge: Decimal) -> bool {
        self.submit_edit(id, ServiceRequestUpdate::completed(labor_charge))
            .await
    }

    pub async fn delete(&mut self, id: i64, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        match self.guard.absorb(client.delete_service_request(id).await) {
            Guarded::Ok(()) => {
                self.list.remove(id);
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
