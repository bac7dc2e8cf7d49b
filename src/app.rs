//! The assembled console
//!
//! [`Backoffice`] wires the member crates together once: one session store,
//! one transport, one notification hub, and the clients built on them.
//! Hosts keep a clone per view; everything inside is shared handles.

use std::sync::Arc;

use backoffice_auth::AuthClient;
use backoffice_forms::PasswordStrength;
use backoffice_http::{ApiClient, HttpConfig, Result};
use backoffice_notify::{Navigator, NoopNavigator, NotificationHub};
use backoffice_resources::AdminApi;
use backoffice_session::{CredentialStore, SessionStore};

/// Everything a console frontend needs.
#[derive(Clone)]
pub struct Backoffice {
    api: ApiClient,
    auth: AuthClient,
    admin: AdminApi,
}

impl Backoffice {
    /// Assembles with defaults: volatile credentials, a silent navigator,
    /// and a fresh notification hub.
    pub fn new(config: HttpConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    /// Assembles from `BACKOFFICE_API_URL` (and friends) with defaults.
    pub fn from_env() -> Result<Self> {
        Self::builder(HttpConfig::from_env()?).build()
    }

    pub fn builder(config: HttpConfig) -> BackofficeBuilder {
        BackofficeBuilder::new(config)
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    pub fn admin(&self) -> &AdminApi {
        &self.admin
    }

    pub fn session(&self) -> &SessionStore {
        self.api.session()
    }

    pub fn hub(&self) -> &NotificationHub {
        self.api.hub()
    }
}

/// Injection points for hosts and tests. Anything not provided falls back
/// to the defaults [`Backoffice::new`] uses.
pub struct BackofficeBuilder {
    config: HttpConfig,
    credentials: Option<Arc<dyn CredentialStore>>,
    navigator: Option<Arc<dyn Navigator>>,
    hub: Option<NotificationHub>,
    password_policy: Option<PasswordStrength>,
}

impl BackofficeBuilder {
    pub fn new(config: HttpConfig) -> Self {
        Self {
            config,
            credentials: None,
            navigator: None,
            hub: None,
            password_policy: None,
        }
    }

    /// Persist the credential somewhere that outlives the process, e.g. a
    /// cookie jar behind [`backoffice_session::CookieCredentialStore`].
    pub fn credentials(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(store);
        self
    }

    /// Receive route changes (sign-in redirects, post-login landing).
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Share a hub the host already renders toasts from.
    pub fn hub(mut self, hub: NotificationHub) -> Self {
        self.hub = Some(hub);
        self
    }

    /// Tighten or relax the password policy used by register and reset.
    pub fn password_policy(mut self, policy: PasswordStrength) -> Self {
        self.password_policy = Some(policy);
        self
    }

    pub fn build(self) -> Result<Backoffice> {
        let session = match self.credentials {
            Some(store) => SessionStore::new(store),
            None => SessionStore::in_memory(),
        };
        let hub = self.hub.unwrap_or_default();
        let navigator = self
            .navigator
            .unwrap_or_else(|| Arc::new(NoopNavigator) as Arc<dyn Navigator>);

        let api = ApiClient::new(self.config, session, hub, navigator)?;
        let auth = match self.password_policy {
            Some(policy) => AuthClient::new(api.clone()).with_password_policy(policy),
            None => AuthClient::new(api.clone()),
        };
        let admin = AdminApi::new(api.clone());

        Ok(Backoffice { api, auth, admin })
    }
}
