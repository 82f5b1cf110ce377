use std::path::PathBuf;

use crate::client::ApiClient;
use crate::config::api_url;
use crate::error::{DashboardError, DashboardResult};
use crate::forms::{FormState, LoginFields, RegisterFields};
use crate::logging::{log_error, log_info};
use crate::models::{Credentials, Registration, UserProfile};
use crate::routes::{resolve, Route};
use crate::session::{Session, SessionStore};

/// Application-level context: the session store, the API client and the current route.
///
/// Lifecycle: empty (or restored from storage) -> populated on login -> cleared on logout.
pub struct AppContext {
    store: SessionStore,
    client: ApiClient,
    route: Route,
}

impl AppContext {
    pub fn new(store: SessionStore, api_url: impl Into<String>) -> DashboardResult<Self> {
        let mut client = ApiClient::new(api_url)?;
        client.set_token(store.token().map(str::to_string));
        let route = resolve(Route::Dashboard, store.is_authenticated());
        Ok(Self { store, client, route })
    }

    /// Load from the default session file and configured API URL.
    pub fn load() -> DashboardResult<Self> {
        Self::new(SessionStore::open_default()?, api_url())
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn session(&self) -> &Session {
        self.store.session()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Ask for a route; the guards decide where we land.
    pub fn navigate(&mut self, requested: Route) -> Route {
        self.route = resolve(requested, self.is_authenticated());
        self.route
    }

    /// Client for calls that need a session. Sends the caller to login otherwise.
    ///
    /// The bearer token is re-read from storage on every call.
    pub fn verified_client(&mut self) -> DashboardResult<&ApiClient> {
        let Some(token) = self.store.persisted_token() else {
            self.client.set_token(None);
            self.route = Route::Login;
            return Err(DashboardError::NotAuthenticated);
        };
        self.client.set_token(Some(token));
        Ok(&self.client)
    }

    /// Validate the login form, exchange credentials for a token and move to the dashboard.
    pub async fn login(&mut self, form: &mut FormState<LoginFields>) -> DashboardResult<()> {
        form.validate()?;

        let credentials = Credentials {
            email: form.fields.email.trim().to_string(),
            password: form.fields.password.clone(),
        };

        let token = match self.client.login(&credentials).await {
            Ok(token) => token,
            Err(e) => {
                log_error(&format!("Login failed: {}", e));
                self.route = Route::Login;
                return Err(e);
            }
        };

        self.store.set_token(token.clone())?;
        self.client.set_token(Some(token));
        form.complete_submit();
        log_info(&format!("Logged in as {}", credentials.email));
        self.navigate(Route::Dashboard);
        Ok(())
    }

    /// Validate the register form and create the account. No session is started.
    pub async fn register(&mut self, form: &mut FormState<RegisterFields>) -> DashboardResult<()> {
        form.validate()?;

        let registration = Registration {
            name: form.fields.name.trim().to_string(),
            email: form.fields.email.trim().to_string(),
            password: form.fields.password.clone(),
        };

        if let Err(e) = self.client.register(&registration).await {
            log_error(&format!("Registration failed: {}", e));
            return Err(e);
        }

        form.complete_submit();
        log_info(&format!("Registered {}", registration.email));
        self.navigate(Route::Login);
        Ok(())
    }

    pub fn set_user(&mut self, user: UserProfile) -> DashboardResult<()> {
        self.store.set_user(user)
    }

    /// Clear the token and profile and return to login.
    pub fn logout(&mut self) -> DashboardResult<()> {
        self.store.clear()?;
        self.client.set_token(None);
        self.navigate(Route::Login);
        log_info("Logged out");
        Ok(())
    }
}

/// Builder for contexts with an explicit session file or API URL.
#[derive(Default)]
pub struct AppContextBuilder {
    session_file: Option<PathBuf>,
    api_url: Option<String>,
}

impl AppContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn build(self) -> DashboardResult<AppContext> {
        let store = match self.session_file {
            Some(path) => SessionStore::open(path),
            None => SessionStore::open_default()?,
        };
        let url = self.api_url.unwrap_or_else(api_url);
        AppContext::new(store, url)
    }
}
