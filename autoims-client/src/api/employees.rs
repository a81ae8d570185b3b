//! Employees API

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List employees; `include_inactive` also returns soft-deleted rows
    pub async fn list_employees(&self, include_inactive: bool) -> ClientResult<Vec<Employee>> {
        let path = if include_inactive {
            "/api/employees?include_inactive=true"
        } else {
            "/api/employees"
        };
        self.get(path).await
    }

    /// Get one employee by id
    pub async fn get_employee(&self, id: i64) -> ClientResult<Employee> {
        self.get(&format!("/api/employees/{id}")).await
    }

    /// Create an employee, returning the canonical server-assigned record
    pub async fn create_employee(&self, payload: &EmployeeCreate) -> ClientResult<Employee> {
        self.post("/api/employees", payload).await
    }

    /// Update an employee, returning the canonical record
    pub async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeeUpdate,
    ) -> ClientResult<Employee> {
        self.put(&format!("/api/employees/{id}"), payload).await
    }

    /// Delete an employee
    pub async fn delete_employee(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/employees/{id}")).await
    }
}
