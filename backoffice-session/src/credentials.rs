//! Credential persistence
//!
//! The dashboard this SDK descends from kept its bearer token in a single
//! cookie, value JSON-encoded, written synchronously on sign-in and sign-out.
//! [`CredentialStore`] keeps that contract pluggable: the session store calls
//! it on every credential change, and implementations decide where the token
//! actually lives.

use parking_lot::Mutex;
use serde_json::Value;

/// Cookie under which the credential is persisted.
pub const CREDENTIAL_COOKIE: &str = "accessToken";

/// Where the bearer credential survives between processes.
///
/// All three operations are synchronous and infallible from the caller's
/// point of view; an implementation that can fail should log and degrade to
/// in-memory behavior rather than block sign-in.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, credential: &str);
    fn clear(&self);
}

/// Keeps the credential for the lifetime of the process. Default for tests
/// and for hosts that manage persistence themselves.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    credential: Mutex<Option<String>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(credential: impl Into<String>) -> Self {
        Self {
            credential: Mutex::new(Some(credential.into())),
        }
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.credential.lock().clone()
    }

    fn save(&self, credential: &str) {
        *self.credential.lock() = Some(credential.to_string());
    }

    fn clear(&self) {
        *self.credential.lock() = None;
    }
}

/// Persists the credential as the dashboard's cookie line:
/// `accessToken=<percent-encoded JSON string>; Path=/; SameSite=Lax`.
///
/// The store itself only holds the line; embedding hosts mirror
/// [`cookie_line`](Self::cookie_line) into their cookie jar after changes and
/// seed the store from the jar at startup via
/// [`from_cookie_line`](Self::from_cookie_line).
#[derive(Debug, Default)]
pub struct CookieCredentialStore {
    line: Mutex<Option<String>>,
}

impl CookieCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a raw `Cookie:`-style line (or a whole jar; the first
    /// `accessToken` pair wins).
    pub fn from_cookie_line(line: &str) -> Self {
        let store = Self::new();
        if let Some(credential) = decode_cookie_line(line) {
            store.save(&credential);
        }
        store
    }

    /// Current cookie line, if a credential is set. `None` means the host
    /// should delete the cookie.
    pub fn cookie_line(&self) -> Option<String> {
        self.line.lock().clone()
    }
}

impl CredentialStore for CookieCredentialStore {
    fn load(&self) -> Option<String> {
        self.line.lock().as_deref().and_then(decode_cookie_line)
    }

    fn save(&self, credential: &str) {
        // JSON-encode first, then percent-encode for the cookie value.
        let json = Value::String(credential.to_string()).to_string();
        let line = format!(
            "{}={}; Path=/; SameSite=Lax",
            CREDENTIAL_COOKIE,
            urlencoding::encode(&json)
        );
        *self.line.lock() = Some(line);
    }

    fn clear(&self) {
        *self.line.lock() = None;
    }
}

/// Extract the credential from a cookie line. Tolerates values written
/// before JSON-encoding was introduced (a bare token).
fn decode_cookie_line(line: &str) -> Option<String> {
    let value = line.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == CREDENTIAL_COOKIE).then_some(value)
    })?;

    let decoded = match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => value.to_string(),
    };

    let credential = match serde_json::from_str::<String>(&decoded) {
        Ok(credential) => credential,
        // Legacy value: stored raw, not JSON-encoded.
        Err(_) => decoded,
    };

    (!credential.is_empty()).then_some(credential)
}
