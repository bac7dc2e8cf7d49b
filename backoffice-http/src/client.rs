//! API client implementation.

use std::sync::Arc;

use http::Method;
use tracing::debug;

use backoffice_notify::{Navigator, Notification, NotificationHub, Route};
use backoffice_session::SessionStore;

use crate::config::HttpConfig;
use crate::error::{ApiError, Result};
use crate::request::{RequestBody, RequestBuilder, RequestParts, build_url};
use crate::response::Response;
use crate::retry::RetryPolicy;

/// The one way onto the wire.
///
/// Holds the session store (bearer injection, 401 teardown), the
/// notification hub, and the navigator, so failure handling is uniform no
/// matter which feature issued the request.
#[derive(Clone)]
pub struct ApiClient {
    inner: reqwest::Client,
    config: Arc<HttpConfig>,
    session: SessionStore,
    hub: NotificationHub,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: HttpConfig,
        session: SessionStore,
        hub: NotificationHub,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            session,
            hub,
            navigator,
        })
    }

    /// Build from `BACKOFFICE_API_URL` (and friends).
    pub fn from_env(
        session: SessionStore,
        hub: NotificationHub,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        Self::new(HttpConfig::from_env()?, session, hub, navigator)
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn hub(&self) -> &NotificationHub {
        &self.hub
    }

    pub fn navigator(&self) -> Arc<dyn Navigator> {
        self.navigator.clone()
    }

    pub fn get(&self, path: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::GET, path.into())
    }

    pub fn post(&self, path: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::POST, path.into())
    }

    pub fn put(&self, path: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::PUT, path.into())
    }

    pub fn patch(&self, path: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::PATCH, path.into())
    }

    pub fn delete(&self, path: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::DELETE, path.into())
    }

    pub fn request(&self, method: Method, path: impl Into<String>) -> RequestBuilder<'_> {
        RequestBuilder::new(self, method, path.into())
    }

    /// Run a request to its final outcome. Retries per `policy` while the
    /// failure is transient; failure side effects (toasts, 401 teardown,
    /// redirect) run exactly once, on the final error only.
    pub(crate) async fn execute(
        &self,
        parts: RequestParts,
        policy: Option<&RetryPolicy>,
    ) -> Result<Response> {
        let mut attempt = 0;

        loop {
            match self.dispatch(&parts).await {
                Ok(response) => return Ok(response),
                Err(error) => {
                    if let Some(policy) = policy
                        && policy.should_retry(attempt, &error)
                    {
                        attempt += 1;
                        let delay = policy.delay_for_attempt(attempt);
                        debug!(
                            attempt,
                            error = %error,
                            delay_ms = delay.as_millis() as u64,
                            path = %parts.path,
                            "retrying request"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    if !parts.quiet {
                        self.apply_failure_effects(&error);
                    }
                    return Err(error);
                }
            }
        }
    }

    /// One attempt: materialize, send, classify.
    async fn dispatch(&self, parts: &RequestParts) -> Result<Response> {
        let request = self.materialize(parts)?;
        match self.inner.execute(request).await {
            Ok(response) => classify(Response::from_reqwest(response).await),
            Err(error) => Err(classify_transport(error)),
        }
    }

    /// Rebuild the `reqwest::Request` for this attempt. The credential is
    /// read here, per attempt, so a request issued before login still goes
    /// out with the header once a credential exists at send time.
    fn materialize(&self, parts: &RequestParts) -> Result<reqwest::Request> {
        let url = build_url(&self.config.base_url, &parts.path, &parts.query)?;
        let mut request = self.inner.request(parts.method.clone(), url);

        for (name, value) in &self.config.default_headers {
            request = request.header(name.as_str(), value.as_str());
        }
        for (name, value) in &parts.headers {
            request = request.header(name, value);
        }
        if let Some(credential) = self.session.credential() {
            request = request.bearer_auth(credential);
        }

        request = match &parts.body {
            RequestBody::Empty => request,
            RequestBody::Bytes(bytes) => request.body(bytes.clone()),
            RequestBody::Multipart(payload) => request.multipart(payload.to_form()),
        };

        if let Some(timeout) = parts.timeout {
            request = request.timeout(timeout);
        }

        request.build().map_err(ApiError::Http)
    }

    /// The dashboard's interceptor table.
    fn apply_failure_effects(&self, error: &ApiError) {
        match error {
            ApiError::Unauthorized => {
                debug!("credential rejected; tearing down session");
                self.session.clear();
                self.hub.notify(Notification::session_expired());
                self.navigator.navigate(Route::Login);
            }
            ApiError::Forbidden => self.hub.notify(Notification::access_denied()),
            ApiError::Server { .. } => self.hub.notify(Notification::server_error()),
            ApiError::Timeout => self.hub.notify(Notification::timeout()),
            ApiError::Network(_) => self.hub.notify(Notification::network()),
            // Payload-level verdicts (400, 404, 409, ...) surface through
            // the caller; the form owns their display.
            _ => {}
        }
    }
}

/// Map a received response onto the error taxonomy.
fn classify(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == http::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if status == http::StatusCode::FORBIDDEN {
        return Err(ApiError::Forbidden);
    }
    if status.is_server_error() {
        return Err(ApiError::Server {
            status: status.as_u16(),
        });
    }
    Err(ApiError::Response {
        status: status.as_u16(),
        message: response.server_message(),
    })
}

/// Map a reqwest-level failure (no response) onto the error taxonomy.
fn classify_transport(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else if error.is_connect() || (error.is_request() && error.status().is_none()) {
        ApiError::Network(error.to_string())
    } else {
        ApiError::Http(error)
    }
}
