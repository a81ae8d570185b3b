//! Employee screen controller

use std::sync::Arc;

use autoims_client::{ClientError, HttpClient};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use validator::Validate;

use crate::guard::{Guarded, SessionGuard};
use crate::views::{ListState, Notice, PopupState};

/// View state of the employee roster screen
pub struct EmployeeView {
    http: HttpClient,
    guard: Arc<SessionGuard>,
    pub list: ListState<Employee>,
    pub popup: PopupState<Employee>,
    pub notice: Notice,
    pub search_term: String,
    /// Also fetch soft-deleted employees
    pub include_inactive: bool,
}

impl EmployeeView {
    pub fn new(http: HttpClient, guard: Arc<SessionGuard>) -> Self {
        Self {
            http,
            guard,
            list: ListState::new(),
            popup: PopupState::default(),
            notice: Notice::new(),
            search_term: String::new(),
            include_inactive: false,
        }
    }

    /// Mount-time (and post-mutation) collection fetch
    pub async fn load(&mut self) {
        let Some(client) = self.guard.authorized(&self.http) else {
            return;
        };
        let generation = self.list.begin_fetch();
        match self
            .guard
            .absorb(client.list_employees(self.include_inactive).await)
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

    /// Rows matching the search box (name or id, case-insensitive)
    pub fn filtered(&self) -> Vec<&Employee> {
        let term = self.search_term.to_lowercase();
        self.list
            .items()
            .iter()
            .filter(|employee| {
                term.is_empty()
                    || employee.name.to_lowercase().contains(&term)
                    || employee.id.to_string().contains(&term)
            })
            .collect()
    }

    pub fn open_add(&mut self) {
        self.popup.open_add();
    }

    pub fn open_edit(&mut self, id: i64) {
        if let Some(employee) = self.list.get(id) {
            self.popup.open_edit(employee.clone());
        }
    }

    pub fn close_popup(&mut self) {
        self.popup.close();
    }

    /// Submit the add form. Validation failures block submission without a
    /// network call; on success the canonical record joins the list and the
    /// popup closes.
    pub async fn submit_add(&mut self, payload: EmployeeCreate) -> bool {
        if let Err(errors) = payload.validate() {
            self.notice.error(ClientError::from(errors).to_string());
            return false;
        }
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        match self.guard.absorb(client.create_employee(&payload).await) {
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

    /// Submit the edit form
    pub async fn submit_edit(&mut self, id: i64, payload: EmployeeUpdate) -> bool {
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        match self.guard.absorb(client.update_employee(id, &payload).await) {
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

    /// Delete after user confirmation. Without confirmation no request is
    /// issued; on failure the list is left untouched.
    pub async fn delete(&mut self, id: i64, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        let Some(client) = self.guard.authorized(&self.http) else {
            return false;
        };
        match self.guard.absorb(client.delete_employee(id).await) {
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
