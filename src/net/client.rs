//! HTTP client for the inventory API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: requests fail with a network error, since there is no
//! browser `fetch` to call.
//!
//! DESIGN
//! ======
//! There is no shared default-header map. Every call takes the bearer token
//! it should use, so a sign-out cannot race a request that already read a
//! stale header. Network failures feed the rate-limited [`NetworkNotice`]
//! before the error is returned to the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, RequestKind};
#[cfg(feature = "csr")]
use super::error::classify;
use crate::config::ApiConfig;
use crate::util::notice::NetworkNotice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Single API client instance shared through context.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    notice: Option<NetworkNotice>,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self { base_url: config.base_url.clone(), notice: None }
    }

    /// Attach the notice raised on network failures.
    #[must_use]
    pub fn with_notice(mut self, notice: NetworkNotice) -> Self {
        self.notice = Some(notice);
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for transport failures, non-2xx
    /// statuses, or bodies that do not decode as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T, ApiError> {
        let text = self.send(Method::Get, RequestKind::Read, path, token, None).await?;
        decode(&text)
    }

    /// Send a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn send_json<B, T>(
        &self,
        method: Method,
        kind: RequestKind,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let text = self.send(method, kind, path, token, Some(encode(body)?)).await?;
        decode(&text)
    }

    /// Send a JSON body and ignore whatever the server answers with.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get`].
    pub async fn send_json_unit<B>(
        &self,
        method: Method,
        kind: RequestKind,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, kind, path, token, Some(encode(body)?)).await.map(|_| ())
    }

    /// `DELETE` a resource.
    ///
    /// # Errors
    ///
    /// A 409 surfaces as [`ApiError::ForeignKeyConflict`].
    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), ApiError> {
        self.send(Method::Delete, RequestKind::Delete, path, token, None).await.map(|_| ())
    }

    async fn send(
        &self,
        method: Method,
        kind: RequestKind,
        path: &str,
        token: Option<&str>,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = self.url(path);
            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Patch => Request::patch(&url),
                Method::Delete => Request::delete(&url),
            };
            if let Some(token) = token {
                builder = builder.header("Authorization", &bearer(token));
            }
            let request = match body {
                Some(body) => builder.header("Content-Type", "application/json").body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Serialization { message: e.to_string() })?;

            let response = match request.send().await {
                Ok(response) => response,
                Err(e) => return Err(self.network_failure(e.to_string())),
            };
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            if response.ok() {
                return Ok(text);
            }
            let err = classify(kind, status, &text);
            if err.is_network() {
                self.raise_notice();
            }
            Err(err)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, kind, path, token, body);
            Err(ApiError::Network { message: "not available outside the browser".to_owned() })
        }
    }

    #[cfg(feature = "csr")]
    fn network_failure(&self, message: String) -> ApiError {
        self.raise_notice();
        ApiError::Network { message }
    }

    #[cfg(feature = "csr")]
    fn raise_notice(&self) {
        if let Some(notice) = &self.notice {
            notice.report();
        }
    }
}

/// `Authorization` header value for a token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Serialization { message: e.to_string() })
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Serialization { message: e.to_string() })
}
