//! Data models for AutoIMS entities
//!
//! Each resource follows the entity + `*Create` + `*Update` triple: the
//! entity mirrors what the backend returns, the payloads carry exactly what
//! the forms submit.

pub mod billing;
pub mod dashboard;
pub mod employee;
pub mod inventory;
pub mod service_request;

pub use billing::{Bill, BillPart, GenerateBillRequest, PaymentStatus, PendingJob};
pub use dashboard::{DashboardResponse, DashboardStats, TopEmployee};
pub use employee::{Employee, EmployeeCreate, EmployeeUpdate, WorkingStatus};
pub use inventory::{
    InventoryItem, InventoryItemCreate, InventoryItemUpdate, StockUpdate, UsePartRequest,
};
pub use service_request::{
    Customer, Priority, RequestStatus, ServiceRequest, ServiceRequestCreate, ServiceRequestUpdate,
    Vehicle,
};
