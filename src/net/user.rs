//! Profile reads and writes.

use tracing::warn;

use crate::client::TellerClient;
use crate::error::Error;
use crate::net::types::UserProfile;
use crate::state::store::Command;
use crate::util::validate;

/// Shown when the profile read fails without a server-provided message.
pub const FETCH_PROFILE_FALLBACK: &str = "Failed to fetch user profile";

/// Shown when the profile update fails without a server-provided message.
pub const UPDATE_PROFILE_FALLBACK: &str = "Failed to update user profile";

impl TellerClient {
    /// Load the signed-in user's profile into the store.
    ///
    /// Runs fire-and-forget: without a live session it does nothing, and a
    /// failed fetch is logged rather than surfaced. The cached profile is
    /// only written while the session that requested it is still current.
    pub async fn fetch_profile(&self) {
        let auth = self.store.auth();
        if !auth.is_authenticated {
            return;
        }
        let Some(token) = auth.token else {
            return;
        };

        let request = Self::bearer(self.request(reqwest::Method::POST, "user/profile"), &token);
        match Self::send_json::<UserProfile>(request, FETCH_PROFILE_FALLBACK).await {
            Ok(profile) => {
                let command = Command::SetUser { profile, session: token };
                if let Err(e) = self.store.dispatch(command).await {
                    warn!(error = %e, "failed to cache fetched profile");
                }
            }
            Err(e) => {
                warn!(error = %e, "profile fetch failed");
            }
        }
    }

    /// Change the signed-in user's first and last name.
    ///
    /// The updated profile echoed by the server is cached and returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when a name fails the signup rules,
    /// the rejection or transport failure from the update call, or
    /// [`Error::StoreClosed`] if the session store is gone.
    pub async fn update_profile(
        &self,
        first_name: &str,
        last_name: &str,
        token: &str,
    ) -> Result<UserProfile, Error> {
        if !validate::is_valid_first_name(first_name) {
            return Err(Error::Validation(validate::FIRST_NAME_MESSAGE));
        }
        if !validate::is_valid_last_name(last_name) {
            return Err(Error::Validation(validate::LAST_NAME_MESSAGE));
        }

        let request = Self::bearer(self.request(reqwest::Method::PUT, "user/profile"), token)
            .json(&serde_json::json!({
                "firstName": first_name,
                "lastName": last_name,
            }));

        let profile = Self::send_json::<UserProfile>(request, UPDATE_PROFILE_FALLBACK).await?;
        let command = Command::SetUser { profile: profile.clone(), session: token.to_owned() };
        self.store.dispatch(command).await?;
        Ok(profile)
    }
}
