//! View controllers, one per data screen

pub mod billing;
pub mod dashboard;
pub mod employees;
pub mod inventory;
pub mod list;
pub mod notice;
pub mod popup;
pub mod service_requests;

pub use billing::BillingView;
pub use dashboard::DashboardView;
pub use employees::EmployeeView;
pub use inventory::InventoryView;
pub use list::{HasId, ListState, LoadPhase};
pub use notice::{Notice, Severity};
pub use popup::PopupState;
pub use service_requests::ServiceRequestView;

use shared::models::{Bill, Employee, InventoryItem, ServiceRequest};

impl HasId for Employee {
    fn id(&self) -> i64 {
        self.id
    }
}

impl HasId for InventoryItem {
    fn id(&self) -> i64 {
        self.id
    }
}

impl HasId for ServiceRequest {
    fn id(&self) -> i64 {
        self.id
    }
}

impl HasId for Bill {
    fn id(&self) -> i64 {
        self.id
    }
}
