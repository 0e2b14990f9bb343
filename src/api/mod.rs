//! Typed wrappers over the platform REST APIs.
//!
//! The main API wraps payloads as `{code, message, data}`, the payment
//! service as `{success, data, message?, code?}`, and the user endpoints
//! return their DTOs bare. All three flavors route through the same
//! refresh-aware [`AuthClient`].

pub mod admin;
pub mod payments;
pub mod statistics;
pub mod surveys;
pub mod types;
pub mod users;

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    auth::{ApiError, AuthClient, Session},
    config::Settings,
};

/// Envelope shape of the main REST API.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Envelope shape of the payment service.
#[derive(Debug, Deserialize)]
pub struct PaymentEnvelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    pub message: Option<String>,
    pub code: Option<String>,
}

/// Client bound to both platform services with one shared session.
pub struct ApiClient {
    auth: AuthClient,
    api_base: String,
    payment_base: String,
}

impl ApiClient {
    /// Build a client from settings, sharing `session` with sibling clients.
    pub fn new(settings: &Settings, session: Arc<Session>) -> Result<Self, ApiError> {
        let refresh_url = format!("{}/users/refresh", settings.api_base_url);
        Ok(Self {
            auth: AuthClient::new(session, refresh_url)?,
            api_base: settings.api_base_url.clone(),
            payment_base: settings.payment_base_url.clone(),
        })
    }

    /// Session shared with the underlying HTTP client.
    pub fn session(&self) -> &Arc<Session> {
        self.auth.session()
    }

    // ----- main API, enveloped -----

    pub(crate) async fn api_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        self.api_request(Method::GET, path, query, None)
            .await?
            .ok_or(ApiError::EmptyEnvelope)
    }

    pub(crate) async fn api_send<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        self.api_request(method, path, &[], Some(body))
            .await?
            .ok_or(ApiError::EmptyEnvelope)
    }

    /// For operations whose envelope carries no data (`data: null`).
    pub(crate) async fn api_send_empty<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        let body = match body {
            Some(body) => Some(serde_json::to_value(body)?),
            None => None,
        };
        self.api_request::<serde_json::Value>(method, path, &[], body)
            .await?;
        Ok(())
    }

    async fn api_request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<Option<T>, ApiError> {
        let url = format!("{}{}", self.api_base, path);
        let response = self
            .auth
            .execute(|http| {
                let mut request = http.request(method.clone(), &url);
                if !query.is_empty() {
                    request = request.query(query);
                }
                if let Some(body) = &body {
                    request = request.json(body);
                }
                request
            })
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(decode_failure(status, response.text().await?));
        }
        let envelope: ApiEnvelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    // ----- user endpoints, bare DTOs -----

    pub(crate) async fn raw_send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.api_base, path);
        let response = self
            .auth
            .execute(|http| {
                let mut request = http.request(method.clone(), &url);
                if !query.is_empty() {
                    request = request.query(query);
                }
                if let Some(body) = &body {
                    request = request.json(body);
                }
                request
            })
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(decode_failure(status, response.text().await?));
        }
        Ok(response.json().await?)
    }

    // ----- payment service, enveloped -----

    pub(crate) async fn payment_get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.payment_request(Method::GET, path, None).await
    }

    pub(crate) async fn payment_send<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        self.payment_request(method, path, Some(body)).await
    }

    async fn payment_request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.payment_base, path);
        let response = self
            .auth
            .execute(|http| {
                let mut request = http.request(method.clone(), &url);
                if let Some(body) = &body {
                    request = request.json(body);
                }
                request
            })
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(decode_failure(status, response.text().await?));
        }
        let envelope: PaymentEnvelope<T> = response.json().await?;
        if !envelope.success {
            return Err(ApiError::Rejected {
                code: envelope.code.unwrap_or_else(|| "UNKNOWN".to_string()),
                message: envelope.message.unwrap_or_default(),
            });
        }
        envelope.data.ok_or(ApiError::EmptyEnvelope)
    }
}

/// Map a non-2xx response to the error taxonomy.
///
/// Business rejections carry a `{code, message}` (or `{error}`) body; anything
/// else degrades to a bare status error.
fn decode_failure(status: StatusCode, body: String) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        code: Option<serde_json::Value>,
        message: Option<String>,
        error: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(&body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            let code = match parsed.code {
                Some(serde_json::Value::String(code)) => code,
                Some(other) => other.to_string(),
                None => status.as_u16().to_string(),
            };
            return ApiError::Rejected { code, message };
        }
    }
    ApiError::Status { status }
}
