//! Session state: bearer-token persistence and expiry
//!
//! The browser console kept its credential under a fixed local-storage key.
//! Here the same single opaque token lives behind a `TokenStore`, with the
//! clock injected so expiry checks are testable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Source of "now" for token-expiry checks
pub trait Clock: Send + Sync {
    fn now_unix(&self) -> u64;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Storage for the single session token
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> std::io::Result<()>;
    fn clear(&self) -> std::io::Result<()>;
}

/// On-disk token file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// Token persisted as a JSON file under a config directory
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        let path = base_path.into().join("session.json");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        let stored: StoredToken = serde_json::from_str(&json).ok()?;
        Some(stored.token)
    }

    fn save(&self, token: &str) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(&StoredToken {
            token: token.to_string(),
        })?;
        fs::write(&self.path, json)
    }

    fn clear(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory token store for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().expect("token lock poisoned").clone()
    }

    fn save(&self, token: &str) -> std::io::Result<()> {
        *self.token.lock().expect("token lock poisoned") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> std::io::Result<()> {
        *self.token.lock().expect("token lock poisoned") = None;
        Ok(())
    }
}

/// Parse the `exp` claim (Unix timestamp) out of a JWT without verifying it.
///
/// The token stays opaque to the client otherwise; verification is the
/// backend's job.
pub fn parse_jwt_exp(token: &str) -> Option<u64> {
    // JWT layout: header.payload.signature
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
    payload.get("exp")?.as_u64()
}

/// The explicit session context passed to every request-issuing function.
pub struct Session {
    store: Box<dyn TokenStore>,
    clock: Box<dyn Clock>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            clock: Box::new(SystemClock),
        }
    }

    /// Override the clock (tests).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The stored token, if any, regardless of expiry.
    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    /// The stored token if it has not expired.
    ///
    /// Tokens without a parseable `exp` claim are assumed live; the backend
    /// will reject them with 401 if not.
    pub fn valid_token(&self) -> Option<String> {
        let token = self.store.load()?;
        if let Some(exp) = parse_jwt_exp(&token)
            && self.clock.now_unix() > exp
        {
            tracing::debug!("stored token expired, discarding");
            let _ = self.store.clear();
            return None;
        }
        Some(token)
    }

    /// Persist a freshly issued token.
    pub fn set_token(&self, token: &str) -> std::io::Result<()> {
        self.store.save(token)
    }

    /// Destroy the session (logout or detected invalidation).
    pub fn clear(&self) -> std::io::Result<()> {
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

    /// Fixed clock for expiry tests
    struct FixedClock(u64);

    impl Clock for FixedClock {
        fn now_unix(&self) -> u64 {
            self.0
        }
    }

    fn jwt_with_exp(exp: u64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"1","exp":{exp}}}"#));
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn parses_exp_claim() {
        assert_eq!(parse_jwt_exp(&jwt_with_exp(1234)), Some(1234));
        assert_eq!(parse_jwt_exp("not-a-jwt"), None);
    }

    #[test]
    fn valid_token_honors_injected_clock() {
        let session =
            Session::new(MemoryTokenStore::with_token(jwt_with_exp(1000))).with_clock(FixedClock(999));
        assert!(session.valid_token().is_some());

        let session =
            Session::new(MemoryTokenStore::with_token(jwt_with_exp(1000))).with_clock(FixedClock(1001));
        assert!(session.valid_token().is_none());
        // expired token is also discarded from the store
        assert!(session.token().is_none());
    }

    #[test]
    fn opaque_token_is_assumed_live() {
        let session =
            Session::new(MemoryTokenStore::with_token("opaque")).with_clock(FixedClock(u64::MAX));
        assert_eq!(session.valid_token().as_deref(), Some("opaque"));
    }
}
