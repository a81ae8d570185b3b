//! AutoIMS Client - HTTP client for the AutoIMS backend
//!
//! Provides the session-guarded network layer of the console: bearer-token
//! session storage, one generic authenticated-request abstraction, and typed
//! per-resource API calls.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{
    Clock, FileTokenStore, MemoryTokenStore, Session, SystemClock, TokenStore, parse_jwt_exp,
};

// Re-export shared types for convenience
pub use shared::client::{ApiErrorBody, LoginRequest, SignupRequest, TokenResponse, UserInfo};
