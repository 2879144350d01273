//! Sign-in and sign-up calls.
//!
//! DESIGN
//! ======
//! `login` is the only operation here that touches session state. Success
//! stores the token (disk first when remember-me is on, then the store) and
//! kicks off a background profile fetch; failure records the error message
//! and clears any cached profile. `sign_up` just creates the account and
//! leaves the caller signed out.

use tracing::warn;

use crate::client::TellerClient;
use crate::error::Error;
use crate::net::types::SessionToken;
use crate::state::store::Command;

/// Shown when a login attempt dies without a server-provided message.
pub const LOGIN_FALLBACK: &str = "Something went wrong, please try again.";

/// Shown when account creation fails without a server-provided message.
pub const SIGNUP_FALLBACK: &str = "Failed to sign up";

impl TellerClient {
    /// Exchange credentials for a session token.
    ///
    /// On success the session is live in the store before this returns; the
    /// profile fetch it triggers completes in the background. On failure the
    /// store records the error message, any remembered token is discarded,
    /// and the error is returned for the caller to surface.
    ///
    /// # Errors
    ///
    /// Returns the rejection or transport failure from the login call, or
    /// [`Error::StoreClosed`] if the session store is gone.
    pub async fn login(&self, email: &str, password: &str, remember_me: bool) -> Result<(), Error> {
        let request = self
            .request(reqwest::Method::POST, "user/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "rememberMe": remember_me,
            }));

        match Self::send_json::<SessionToken>(request, LOGIN_FALLBACK).await {
            Ok(SessionToken { token }) => {
                if remember_me {
                    // A failed write downgrades remember-me to this session
                    // only; the login itself stands.
                    if let Err(e) = self.tokens.save(&token) {
                        warn!(error = %e, "failed to persist session token");
                    }
                }
                self.store.dispatch(Command::SetCredentials { token }).await?;

                let client = self.clone();
                tokio::spawn(async move { client.fetch_profile().await });
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                if let Err(store_err) = self.store.dispatch(Command::LoginFailed { message }).await {
                    warn!(error = %store_err, "failed to record login failure");
                }
                if let Err(store_err) = self.store.dispatch(Command::ClearUser).await {
                    warn!(error = %store_err, "failed to clear cached profile");
                }
                Err(e)
            }
        }
    }

    /// Create an account. Does not sign the new user in.
    ///
    /// # Errors
    ///
    /// Returns the rejection or transport failure from the signup call.
    pub async fn sign_up(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), Error> {
        let request = self
            .request(reqwest::Method::POST, "user/signup")
            .json(&serde_json::json!({
                "firstName": first_name,
                "lastName": last_name,
                "email": email,
                "password": password,
            }));

        Self::send_json::<serde_json::Value>(request, SIGNUP_FALLBACK).await?;
        Ok(())
    }
}
