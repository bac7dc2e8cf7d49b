//! Wire types for the auth endpoints

use backoffice_session::UserProfile;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// One credential with its optional expiry timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    #[serde(default)]
    pub token: String,
    pub expires: Option<String>,
}

/// The credential pair a successful login carries.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access: Option<AccessToken>,
    pub refresh: Option<AccessToken>,
}

/// Body of a `POST /auth/login` response.
///
/// Every member is optional on the wire; [`access_token`](Self::access_token)
/// is the one check that matters.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub tokens: Option<TokenPair>,
    pub user: Option<UserProfile>,
}

impl LoginResponse {
    /// The access credential, if the server actually sent a usable one.
    pub fn access_token(&self) -> Option<&str> {
        let token = self.tokens.as_ref()?.access.as_ref()?.token.trim();
        (!token.is_empty()).then_some(token)
    }
}

/// Body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Body for `POST /auth/forgot-password`.
#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Body for `POST /auth/reset-password`.
#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

/// Peels an optional `data` envelope off a response body. Deployments
/// differ on whether auth payloads arrive bare or wrapped; the `data`
/// member wins when present.
pub(crate) fn unwrap_data(mut body: Value) -> Value {
    if let Value::Object(map) = &mut body
        && let Some(inner) = map.remove("data")
        && !inner.is_null()
    {
        return inner;
    }
    body
}
