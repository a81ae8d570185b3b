//! Session guard
//!
//! One shared gate for every protected request on every screen: check the
//! stored token before issuing a call, and turn any 401 into a token clear
//! plus a single redirect to the login route. A 401 is a navigation event,
//! never a user-facing error.

use std::sync::Arc;

use autoims_client::{ClientError, ClientResult, HttpClient, Session};

use crate::nav::{Navigator, Route};

/// Outcome of a guarded request
#[derive(Debug)]
pub enum Guarded<T> {
    /// The request succeeded
    Ok(T),
    /// The session was invalid or invalidated; the user is on their way to
    /// the login screen and nothing should be surfaced
    RedirectedToLogin,
    /// A real failure the view must surface
    Failed(ClientError),
}

impl<T> Guarded<T> {
    /// The success value, if any
    pub fn ok(self) -> Option<T> {
        match self {
            Guarded::Ok(value) => Some(value),
            _ => None,
        }
    }
}

/// Session guard wrapping every protected view
pub struct SessionGuard {
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl SessionGuard {
    pub fn new(session: Session, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Pre-flight check: produce a client carrying the stored token, or
    /// redirect to login **without issuing any network call**.
    pub fn authorized(&self, client: &HttpClient) -> Option<HttpClient> {
        match self.session.valid_token() {
            Some(token) => Some(client.clone().with_token(token)),
            None => {
                tracing::debug!("no stored token, redirecting to login");
                self.navigator.redirect(Route::Login);
                None
            }
        }
    }

    /// Post-flight check: absorb a 401 by clearing the token and redirecting
    /// exactly once; pass every other outcome through.
    pub fn absorb<T>(&self, result: ClientResult<T>) -> Guarded<T> {
        match result {
            Ok(value) => Guarded::Ok(value),
            Err(error) if error.is_auth() => {
                if let Err(io_err) = self.session.clear() {
                    tracing::warn!(error = %io_err, "failed to clear stored token");
                }
                self.navigator.redirect(Route::Login);
                Guarded::RedirectedToLogin
            }
            Err(error) => Guarded::Failed(error),
        }
    }
}
