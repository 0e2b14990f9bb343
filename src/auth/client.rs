//! Authenticated HTTP client with single-refresh-and-retry semantics.

use std::sync::Arc;

use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::auth::Session;

/// Failure taxonomy for calls against the platform APIs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connection, TLS, or body read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// JSON payload could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
    /// The session could not be refreshed; the caller must sign in again.
    #[error("session expired; sign in again")]
    SessionExpired,
    /// Business rejection from the API, with its server-side code.
    #[error("request rejected ({code}): {message}")]
    Rejected { code: String, message: String },
    /// Unexpected HTTP status with no parseable error body.
    #[error("unexpected status {status}")]
    Status { status: StatusCode },
    /// A success envelope arrived without its data payload.
    #[error("response envelope missing data")]
    EmptyEnvelope,
}

/// HTTP client that attaches the session's bearer token to every request
/// and silently refreshes the token once on a 401.
///
/// State machine per request: authenticated send, then at most one
/// refresh-and-replay. A 401 on the replay propagates untouched, and a
/// failed refresh arms the session's logout latch.
pub struct AuthClient {
    http: Client,
    session: Arc<Session>,
    refresh_url: String,
}

impl AuthClient {
    /// Build a client against the given refresh endpoint.
    ///
    /// The refresh token travels as a cookie, so the underlying client keeps
    /// a cookie store for the lifetime of the session.
    pub fn new(session: Arc<Session>, refresh_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("formpoint/", env!("CARGO_PKG_VERSION")))
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self {
            http,
            session,
            refresh_url: refresh_url.into(),
        })
    }

    /// Session shared with sibling clients.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Execute a request, transparently refreshing the session once on 401.
    ///
    /// Unauthenticated calls (no stored token) fail through untouched.
    pub async fn execute(
        &self,
        build: impl Fn(&Client) -> RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = self.send_with_token(&build).await?;
        if response.status() != StatusCode::UNAUTHORIZED || self.session.token().is_none() {
            return Ok(response);
        }

        match self.refresh().await {
            Ok(token) => {
                self.session.set_token(token);
                debug!("access token refreshed, replaying request");
                // A second 401 on the replay is returned as-is.
                self.send_with_token(&build).await
            }
            Err(err) => {
                if self.session.begin_logout() {
                    self.session.clear_token();
                    warn!("session refresh rejected; credentials cleared, sign in again");
                }
                Err(err)
            }
        }
    }

    async fn send_with_token(
        &self,
        build: &impl Fn(&Client) -> RequestBuilder,
    ) -> Result<Response, ApiError> {
        let mut request = build(&self.http);
        if let Some(token) = self.session.token() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        Ok(request.send().await?)
    }

    /// Mint a new access token using the refresh cookie.
    async fn refresh(&self) -> Result<String, ApiError> {
        let response = self.http.post(&self.refresh_url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::SessionExpired);
        }
        let body: RefreshResponse = response.json().await?;
        match body.access_token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ApiError::SessionExpired),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshResponse {
    access_token: Option<String>,
}
