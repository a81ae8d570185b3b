//! Typed API surface, one module per backend resource
//!
//! Each module layers typed calls over the generic verbs in
//! [`crate::HttpClient`]; nothing here touches the network directly.

pub mod auth;
pub mod billing;
pub mod dashboard;
pub mod employees;
pub mod inventory;
pub mod service_requests;
