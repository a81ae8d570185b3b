//! Service Requests API

use shared::models::{ServiceRequest, ServiceRequestCreate, ServiceRequestUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List service requests; `include_employees` embeds the assigned
    /// employee record in each row
    pub async fn list_service_requests(
        &self,
        include_employees: bool,
    ) -> ClientResult<Vec<ServiceRequest>> {
        let path = if include_employees {
            "/api/service-requests?include_employees=true"
        } else {
            "/api/service-requests"
        };
        self.get(path).await
    }

    /// Get one service request by id
    pub async fn get_service_request(&self, id: i64) -> ClientResult<ServiceRequest> {
        self.get(&format!("/api/service-requests/{id}")).await
    }

    /// Create a service request, returning the canonical record
    pub async fn create_service_request(
        &self,
        payload: &ServiceRequestCreate,
    ) -> ClientResult<ServiceRequest> {
        self.post("/api/service-requests", payload).await
    }

    /// Update a service request, returning the canonical record.
    ///
    /// The payload is sanitized first: `labor_charge` only travels on the
    /// transition to Completed.
    pub async fn update_service_request(
        &self,
        id: i64,
        payload: &ServiceRequestUpdate,
    ) -> ClientResult<ServiceRequest> {
        let payload = payload.clone().sanitized();
        self.put(&format!("/api/service-requests/{id}"), &payload)
            .await
    }

    /// Delete a service request
    pub async fn delete_service_request(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/service-requests/{id}")).await
    }
}
