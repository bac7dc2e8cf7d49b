//! Authentication flows
//!
//! [`AuthClient`] drives the five auth operations against the backend and
//! owns their side effects: the session credential, the post-login profile
//! fetch, success notifications, and navigation. Each operation runs under
//! its flow guard so a double-submit cannot fire twice.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use backoffice_forms::{IsEmail, NotEmpty, PasswordStrength};
use backoffice_http::{ApiClient, ApiError, RetryPolicy};
use backoffice_notify::{Notification, Route};
use backoffice_session::{SessionStore, UserProfile};

use crate::error::{AuthError, Result};
use crate::flow::{FlowKind, FlowPhase, FlowTracker};
use crate::types::{
    unwrap_data, ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
    ResetPasswordRequest,
};

/// Acknowledgement returned for every password-reset request, whatever the
/// server's verdict, so responses cannot reveal whether an account exists.
pub const PASSWORD_RESET_SENT: &str =
    "If an account exists for this email, a password reset link has been sent.";

/// Client for login, registration, logout, and password recovery.
///
/// Clones share flow state, so a clone cannot be used to sidestep the
/// non-reentrancy guard.
#[derive(Clone)]
pub struct AuthClient {
    api: ApiClient,
    flows: Arc<FlowTracker>,
    password_policy: PasswordStrength,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            flows: Arc::new(FlowTracker::default()),
            password_policy: PasswordStrength::default(),
        }
    }

    /// Overrides the default password policy (8 chars, all four classes).
    pub fn with_password_policy(mut self, policy: PasswordStrength) -> Self {
        self.password_policy = policy;
        self
    }

    /// Current phase of a flow, for UI binding.
    pub fn phase(&self, flow: FlowKind) -> FlowPhase {
        self.flows.phase(flow)
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    fn session(&self) -> &SessionStore {
        self.api.session()
    }

    /// Authenticates and installs the returned credential.
    ///
    /// A 2xx response without a usable `tokens.access.token` is a failure:
    /// the session is left untouched and no navigation happens. On success
    /// the profile fetch runs in the background and the host is pointed at
    /// the dashboard.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let mut errors = Vec::new();
        if let Err(error) = IsEmail::validate(email, "email") {
            errors.push(error);
        }
        if let Err(error) = NotEmpty::validate(password, "password") {
            errors.push(error);
        }
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        let flow = self.flows.begin(FlowKind::Login)?;

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .api
            .post("/auth/login")
            .json(&request)
            .send()
            .await
            .map_err(reject)?;

        let body: Value = response.json()?;
        let parsed: LoginResponse = serde_json::from_value(unwrap_data(body))
            .map_err(|e| ApiError::Json(e.to_string()))?;

        let Some(token) = parsed.access_token() else {
            debug!("login response carried no usable credential");
            return Err(AuthError::MissingCredential);
        };

        self.session().set_credential(token);
        self.spawn_profile_fetch();
        self.api.navigator().navigate(Route::Dashboard);
        flow.succeed();
        Ok(())
    }

    /// Creates an account. Success lands on the sign-in page; registration
    /// never authenticates by itself.
    pub async fn register(&self, request: RegisterRequest) -> Result<()> {
        let mut errors = Vec::new();
        if let Err(error) = NotEmpty::validate(&request.name, "name") {
            errors.push(error);
        }
        if let Err(error) = IsEmail::validate(&request.email, "email") {
            errors.push(error);
        }
        if let Err(password_errors) = self.password_policy.validate(&request.password, "password")
        {
            errors.extend(password_errors);
        }
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        let flow = self.flows.begin(FlowKind::Register)?;
        self.api
            .post("/auth/register")
            .json(&request)
            .send()
            .await
            .map_err(reject)?;

        self.api
            .hub()
            .notify(Notification::success("Account created. Please sign in."));
        self.api.navigator().navigate(Route::Login);
        flow.succeed();
        Ok(())
    }

    /// Signs out. Always succeeds from the caller's perspective: the
    /// server-side revocation is best-effort and quiet, the local teardown
    /// is unconditional.
    pub async fn logout(&self) {
        let Ok(flow) = self.flows.begin(FlowKind::Logout) else {
            return;
        };

        if let Err(error) = self.api.post("/auth/logout").quiet().send().await {
            debug!(%error, "logout revocation failed; clearing locally anyway");
        }

        self.session().clear();
        self.api.navigator().navigate(Route::Login);
        flow.succeed();
    }

    /// Requests a password-reset email.
    ///
    /// Every server verdict, found or not, yields [`PASSWORD_RESET_SENT`];
    /// a distinguishable answer would let callers probe which emails have
    /// accounts. Transport failures still propagate so the form stays
    /// re-submittable.
    pub async fn forgot_password(&self, email: &str) -> Result<&'static str> {
        IsEmail::validate(email, "email").map_err(|e| AuthError::Validation(vec![e]))?;

        let flow = self.flows.begin(FlowKind::ForgotPassword)?;
        let request = ForgotPasswordRequest {
            email: email.to_string(),
        };
        match self
            .api
            .post("/auth/forgot-password")
            .json(&request)
            .send()
            .await
        {
            Ok(_) => {}
            Err(ApiError::Response { status, .. }) => {
                debug!(status, "forgot-password verdict masked");
            }
            Err(error) => return Err(error.into()),
        }

        flow.succeed();
        Ok(PASSWORD_RESET_SENT)
    }

    /// Sets a new password using the token from the reset link.
    ///
    /// A missing or blank token fails locally with zero network calls; the
    /// link simply has to be followed again.
    pub async fn reset_password(&self, token: Option<&str>, new_password: &str) -> Result<()> {
        let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
            return Err(AuthError::MissingResetToken);
        };
        self.password_policy
            .validate(new_password, "password")
            .map_err(AuthError::Validation)?;

        let flow = self.flows.begin(FlowKind::ResetPassword)?;
        let request = ResetPasswordRequest {
            password: new_password.to_string(),
        };
        self.api
            .post("/auth/reset-password")
            .query("token", token)
            .json(&request)
            .send()
            .await
            .map_err(reject)?;

        self.api
            .hub()
            .notify(Notification::success("Password updated. Please sign in."));
        self.api.navigator().navigate(Route::Login);
        flow.succeed();
        Ok(())
    }

    /// Refreshes the current user's profile and applies it to the session.
    ///
    /// On failure the previous profile is kept and `last_error` set; an
    /// unreachable profile endpoint is not a sign-out.
    pub async fn fetch_current_user(&self) -> Result<UserProfile> {
        let generation = self.session().begin_profile_fetch();
        match fetch_profile(&self.api).await {
            Ok(profile) => {
                self.session().apply_profile(generation, Ok(profile.clone()));
                Ok(profile)
            }
            Err(error) => {
                self.session().apply_profile(generation, Err(error.to_string()));
                Err(error.into())
            }
        }
    }

    /// Spawns the profile fetch that follows a credential change. The result
    /// is applied under the generation captured here, so a logout landing
    /// mid-flight orphans it.
    fn spawn_profile_fetch(&self) {
        let api = self.api.clone();
        let generation = api.session().begin_profile_fetch();
        tokio::spawn(async move {
            let outcome = fetch_profile(&api).await.map_err(|e| e.to_string());
            api.session().apply_profile(generation, outcome);
        });
    }
}

async fn fetch_profile(api: &ApiClient) -> std::result::Result<UserProfile, ApiError> {
    let response = api
        .get("/users/me")
        .send_with_retry(&RetryPolicy::default())
        .await?;
    let body: Value = response.json()?;
    serde_json::from_value(unwrap_data(body)).map_err(|e| ApiError::Json(e.to_string()))
}

/// Payload-level verdicts become displayable rejections; transport errors
/// pass through (their notifications already fired in the adapter).
fn reject(error: ApiError) -> AuthError {
    match error {
        ApiError::Response { message, .. } => AuthError::Rejected { message },
        other => AuthError::Api(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_maps_payload_verdicts_only() {
        let rejected = reject(ApiError::Response {
            status: 400,
            message: "Invalid credentials".to_string(),
        });
        assert!(
            matches!(rejected, AuthError::Rejected { ref message } if message == "Invalid credentials")
        );

        assert!(matches!(
            reject(ApiError::Timeout),
            AuthError::Api(ApiError::Timeout)
        ));
    }
}
