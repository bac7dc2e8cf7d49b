//! Request builder.

use std::time::Duration;

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::{ApiError, Result};
use crate::response::Response;
use crate::retry::RetryPolicy;

/// Builder for one request against the backend.
///
/// Paths are relative to the configured base URL. The bearer header is not
/// set here; the client injects the current credential at send time, once
/// per attempt.
pub struct RequestBuilder<'a> {
    client: &'a ApiClient,
    parts: RequestParts,
    build_error: Option<ApiError>,
}

impl<'a> RequestBuilder<'a> {
    pub(crate) fn new(client: &'a ApiClient, method: Method, path: String) -> Self {
        Self {
            client,
            parts: RequestParts {
                method,
                path,
                headers: HeaderMap::new(),
                query: Vec::new(),
                body: RequestBody::Empty,
                timeout: None,
                quiet: false,
            },
            build_error: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            self.parts.headers.insert(name, value);
        }
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.query.push((key.into(), value.into()));
        self
    }

    pub fn queries<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in params {
            self.parts.query.push((k.into(), v.into()));
        }
        self
    }

    /// JSON body. A value that fails to serialize fails the whole request at
    /// send time; it is never sent body-less.
    pub fn json<T: Serialize>(mut self, json: &T) -> Self {
        match serde_json::to_vec(json) {
            Ok(bytes) => {
                self.parts.headers.insert(
                    http::header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                );
                self.parts.body = RequestBody::Bytes(bytes);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize JSON body");
                self.build_error = Some(ApiError::Json(e.to_string()));
            }
        }
        self
    }

    /// URL-encoded form body.
    pub fn form<T: Serialize>(mut self, form: &T) -> Self {
        match serde_urlencoded::to_string(form) {
            Ok(encoded) => {
                self.parts.headers.insert(
                    http::header::CONTENT_TYPE,
                    HeaderValue::from_static("application/x-www-form-urlencoded"),
                );
                self.parts.body = RequestBody::Bytes(encoded.into_bytes());
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to encode form body");
                self.build_error = Some(ApiError::Json(e.to_string()));
            }
        }
        self
    }

    /// Multipart body (file uploads, image-bearing product updates).
    pub fn multipart(mut self, payload: FormPayload) -> Self {
        self.parts.body = RequestBody::Multipart(payload);
        self
    }

    /// Per-request timeout override.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.parts.timeout = Some(timeout);
        self
    }

    /// Suppress failure side effects (toasts, session teardown, redirect)
    /// for this request. The error still returns to the caller. Used for
    /// best-effort calls like logout revocation.
    pub fn quiet(mut self) -> Self {
        self.parts.quiet = true;
        self
    }

    /// Send with a single attempt.
    pub async fn send(self) -> Result<Response> {
        if let Some(error) = self.build_error {
            return Err(error);
        }
        self.client.execute(self.parts, None).await
    }

    /// Send, repeating per `policy` while the failure is transient. Only
    /// meant for idempotent reads.
    pub async fn send_with_retry(self, policy: &RetryPolicy) -> Result<Response> {
        if let Some(error) = self.build_error {
            return Err(error);
        }
        self.client.execute(self.parts, Some(policy)).await
    }
}

/// Everything needed to materialize a `reqwest::Request`, kept in owned form
/// so retries can rebuild the request, body included.
pub(crate) struct RequestParts {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) headers: HeaderMap,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: RequestBody,
    pub(crate) timeout: Option<Duration>,
    pub(crate) quiet: bool,
}

pub(crate) enum RequestBody {
    Empty,
    Bytes(Vec<u8>),
    Multipart(FormPayload),
}

/// Multipart form description.
///
/// Owned and cloneable, unlike `reqwest::multipart::Form`, so it can sit in
/// [`RequestParts`] and be materialized per attempt. Repeated array-style
/// keys (`images[]`) are appended once per value, the way the backend's form
/// parser expects them.
#[derive(Debug, Clone, Default)]
pub struct FormPayload {
    parts: Vec<FormPart>,
}

#[derive(Debug, Clone)]
enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: String,
        data: Vec<u8>,
    },
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append `name` once per value. Pass the array-style key directly,
    /// e.g. `text_each("sizes[]", ["S", "M"])`.
    pub fn text_each<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = name.into();
        for value in values {
            self.parts.push(FormPart::Text {
                name: name.clone(),
                value: value.into(),
            });
        }
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub(crate) fn to_form(&self) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        for part in &self.parts {
            match part {
                FormPart::Text { name, value } => {
                    form = form.text(name.clone(), value.clone());
                }
                FormPart::File {
                    name,
                    file_name,
                    content_type,
                    data,
                } => {
                    let file = reqwest::multipart::Part::bytes(data.clone())
                        .file_name(file_name.clone());
                    let file = match file.mime_str(content_type) {
                        Ok(file) => file,
                        Err(e) => {
                            tracing::warn!(content_type, error = %e, "invalid part mime; sending untyped");
                            reqwest::multipart::Part::bytes(data.clone())
                                .file_name(file_name.clone())
                        }
                    };
                    form = form.part(name.clone(), file);
                }
            }
        }
        form
    }
}

/// Join `path` under the configured base URL, preserving any path prefix the
/// base carries, then append query pairs.
pub(crate) fn build_url(
    base_url: &str,
    path: &str,
    query: &[(String, String)],
) -> Result<url::Url> {
    let mut base = base_url.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    let base = url::Url::parse(&base).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
    let mut url = base
        .join(path.trim_start_matches('/'))
        .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}
