//! Client context — one handle owning the HTTP client, config, and store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `TellerClient` is the crate's front door. Construction restores any
//! remembered session from the token store, spawns the state task, and
//! builds the shared `reqwest` client. Handles are cheap to clone and every
//! clone talks to the same session state, so callers can hand them to
//! background tasks freely.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use tracing::warn;

use crate::config::Config;
use crate::error::Error;
use crate::persist::{FileTokenStore, TokenStore};
use crate::state::auth::AuthState;
use crate::state::reader::StateReader;
use crate::state::store::{Command, Store};

const USER_AGENT: &str = concat!("teller/", env!("CARGO_PKG_VERSION"));

/// Shared handle to the session: HTTP plumbing plus the state store.
#[derive(Clone)]
pub struct TellerClient {
    pub(crate) config: Config,
    pub(crate) http: reqwest::Client,
    pub(crate) store: Store,
    pub(crate) tokens: Arc<dyn TokenStore>,
}

impl TellerClient {
    /// Build a client over the given token store.
    ///
    /// A token already present in the store restores the session as
    /// authenticated; an unreadable store is logged and treated as signed
    /// out rather than blocking startup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Init`] when the HTTP client cannot be constructed.
    pub fn new(config: Config, tokens: Arc<dyn TokenStore>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        let auth = match tokens.load() {
            Ok(Some(token)) => AuthState::restored(token),
            Ok(None) => AuthState::new(),
            Err(e) => {
                warn!(error = %e, "failed to read persisted session, starting signed out");
                AuthState::new()
            }
        };
        let store = Store::spawn(auth, tokens.clone());

        Ok(Self { config, http, store, tokens })
    }

    /// Build a client from `TELLER_*` environment variables, remembering
    /// sessions in the configured token file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Init`] when the HTTP client cannot be constructed.
    pub fn from_env() -> Result<Self, Error> {
        let config = Config::from_env();
        let tokens = Arc::new(FileTokenStore::new(config.token_file.clone()));
        Self::new(config, tokens)
    }

    /// Watch handle over session and profile state.
    #[must_use]
    pub fn reader(&self) -> StateReader {
        self.store.reader()
    }

    /// Current session snapshot.
    #[must_use]
    pub fn auth(&self) -> AuthState {
        self.store.auth()
    }

    /// Warm the profile cache for a restored session. No-op when signed out.
    pub async fn initialize_auth(&self) {
        let auth = self.store.auth();
        if auth.is_authenticated && auth.token.is_some() {
            self.fetch_profile().await;
        }
    }

    /// End the session: reset auth, drop the remembered token, clear the
    /// cached profile.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreClosed`] if the session store is gone.
    pub async fn logout(&self) -> Result<(), Error> {
        self.store.dispatch(Command::Logout).await?;
        self.store.dispatch(Command::ClearUser).await
    }
}
