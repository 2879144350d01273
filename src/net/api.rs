//! Request plumbing shared by the data-access layers.
//!
//! DESIGN
//! ======
//! `send_json` drives one round trip. Non-success statuses become
//! `Error::Rejected` carrying the server's `message` when the error body
//! has one; transport failures and undecodable success bodies become
//! `Error::Transport`. Either way the caller's per-operation fallback is
//! the message of last resort, so `Display` on the returned error is
//! always fit to show a user.

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::client::TellerClient;
use crate::error::Error;
use crate::net::types::{Envelope, ErrorBody};

impl TellerClient {
    /// Build a request against a path under `/api/v1/`.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/api/v1/{path}", self.config.base_url.trim_end_matches('/'));
        self.http.request(method, url)
    }

    /// Attach a bearer token.
    pub(crate) fn bearer(request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("Bearer {token}"))
    }

    /// Send the request, enforce the status, and peel the success envelope.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T, Error> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport { message: fallback.to_owned(), source: e })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            return Err(Error::Rejected {
                status: status.as_u16(),
                message: body.message.unwrap_or_else(|| fallback.to_owned()),
            });
        }

        let envelope = response
            .json::<Envelope<T>>()
            .await
            .map_err(|e| Error::Transport { message: fallback.to_owned(), source: e })?;
        Ok(envelope.body)
    }
}
