//! Service Request Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Employee;

/// Customer snapshot embedded in a service request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Customer {
    #[validate(length(min = 1, message = "customer name is required"))]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

/// Vehicle snapshot embedded in a service request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Vehicle {
    #[validate(length(min = 1, message = "plate number is required"))]
    pub plate_no: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub color: String,
}

/// Request priority
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

/// Request lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

/// Service request entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: i64,
    pub customer: Customer,
    pub vehicle: Vehicle,
    pub service_type: String,
    #[serde(default)]
    pub problem_note: Option<String>,
    pub priority: Priority,
    pub status: RequestStatus,
    #[serde(default)]
    pub assigned_employee_id: Option<i64>,
    /// Present only when the list was fetched with `include_employees`
    #[serde(default)]
    pub assigned_employee: Option<Employee>,
    #[serde(default)]
    pub labor_charge: Option<Decimal>,
    #[serde(default)]
    pub request_date: Option<DateTime<Utc>>,
}

/// Create service request payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServiceRequestCreate {
    #[validate(nested)]
    pub customer: Customer,
    #[validate(nested)]
    pub vehicle: Vehicle,
    #[validate(length(min = 1, message = "service type is required"))]
    pub service_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_note: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

/// Update service request payload
///
/// `labor_charge` is only meaningful on the transition to `Completed`; the
/// backend uses it to generate the job's bill. `sanitized()` strips it from
/// any other update so it can never leak into an unrelated PUT body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceRequestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_employee_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labor_charge: Option<Decimal>,
}

impl ServiceRequestUpdate {
    /// Update that only moves the request to a new status.
    pub fn status_change(status: RequestStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Update that completes the request, carrying the labor charge the
    /// backend needs to generate the bill.
    pub fn completed(labor_charge: Decimal) -> Self {
        Self {
            status: Some(RequestStatus::Completed),
            labor_charge: Some(labor_charge),
            ..Self::default()
        }
    }

    /// Drops `labor_charge` unless this update sets status to `Completed`.
    pub fn sanitized(mut self) -> Self {
        if self.status != Some(RequestStatus::Completed) {
            self.labor_charge = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        let parsed: RequestStatus = serde_json::from_str("\"Cancelled\"").unwrap();
        assert_eq!(parsed, RequestStatus::Cancelled);
    }

    #[test]
    fn completed_update_carries_labor_charge() {
        let update = ServiceRequestUpdate::completed(Decimal::new(500, 0)).sanitized();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["status"], "Completed");
        assert_eq!(json["labor_charge"], serde_json::json!(500.0));
    }

    #[test]
    fn sanitize_strips_labor_charge_outside_completion() {
        let update = ServiceRequestUpdate {
            status: Some(RequestStatus::InProgress),
            labor_charge: Some(Decimal::new(500, 0)),
            ..Default::default()
        }
        .sanitized();
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("labor_charge").is_none());
    }

    #[test]
    fn create_validates_nested_snapshots() {
        let payload = ServiceRequestCreate {
            customer: Customer {
                name: String::new(),
                ..Default::default()
            },
            vehicle: Vehicle {
                plate_no: "KA-01".into(),
                ..Default::default()
            },
            service_type: "Oil Change".into(),
            problem_note: None,
            priority: Priority::Normal,
        };
        assert!(validator::Validate::validate(&payload).is_err());
    }
}
