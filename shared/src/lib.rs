//! Shared types for the AutoIMS console
//!
//! Wire-level records exchanged verbatim with the AutoIMS backend: entity
//! models, create/update payloads, and auth DTOs. The client holds no
//! authoritative state; these types mirror the backend's JSON exactly.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{ApiErrorBody, LoginRequest, SignupRequest, TokenResponse, UserInfo};
pub use models::{
    Bill, BillPart, Customer, DashboardResponse, DashboardStats, Employee, GenerateBillRequest,
    InventoryItem, PaymentStatus, PendingJob, Priority, RequestStatus, ServiceRequest, TopEmployee,
    UsePartRequest, Vehicle, WorkingStatus,
};
