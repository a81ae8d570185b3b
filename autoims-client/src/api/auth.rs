//! Auth API

use crate::{ClientResult, HttpClient, LoginRequest, SignupRequest, TokenResponse, UserInfo};

impl HttpClient {
    /// Register a new user and receive a session token
    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<TokenResponse> {
        self.post("/api/signup", request).await
    }

    /// Authenticate and receive a session token
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<TokenResponse> {
        self.post("/api/login", request).await
    }

    /// Get the current user
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.get("/api/me").await
    }
}
