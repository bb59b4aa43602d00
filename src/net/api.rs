//! Student auth API client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: `HttpAuthClient` answers every call with
//! `ApiError::Unavailable`, since the endpoints are only reachable from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses keep the status
//! and the server-provided `message`, which the session store surfaces to the
//! student for registration failures.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{LoginResponse, NewStudent, RegisterResponse, Student};
use crate::config::ClientConfig;

pub const ME_PATH: &str = "/students/me";
pub const LOGIN_PATH: &str = "/students/login";
pub const REGISTER_PATH: &str = "/students/register";
pub const LOGOUT_PATH: &str = "/students/logout";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message the API attached to a failed response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref().filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }
}

/// Build a status error from a raw response body.
///
/// Bodies that are not JSON, or carry no `message`, yield `message: None`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<super::types::ErrorBody>(body)
        .ok()
        .and_then(|b| b.message);
    ApiError::Status { status, message }
}

/// The four auth calls the session store depends on.
///
/// Futures are not `Send`: browser fetch futures live on the single UI thread.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `GET /students/me`: the student owning the current session.
    async fn me(&self) -> Result<Student, ApiError>;
    /// `POST /students/login`.
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;
    /// `POST /students/register`.
    async fn register(&self, student: &NewStudent) -> Result<RegisterResponse, ApiError>;
    /// `GET /students/logout`.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// `AuthApi` over HTTP against the configured student API.
#[derive(Clone, Debug)]
pub struct HttpAuthClient {
    config: ClientConfig,
}

impl HttpAuthClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Absolute URL for one of the `*_PATH` constants.
    pub fn endpoint(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;
    use web_sys::RequestCredentials;

    use super::{ApiError, status_error};

    pub(super) fn get(url: &str) -> RequestBuilder {
        Request::get(url).credentials(RequestCredentials::Include)
    }

    pub(super) fn post(url: &str) -> RequestBuilder {
        Request::post(url).credentials(RequestCredentials::Include)
    }

    pub(super) async fn send(req: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        let req = req.map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(status_error(resp.status(), &body))
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthClient {
    async fn me(&self) -> Result<Student, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint(ME_PATH);
            let resp = browser::send(browser::get(&url).build()).await?;
            let body: super::types::MeResponse = browser::decode(resp).await?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint(LOGIN_PATH);
            let payload = super::types::LoginRequest { email, password };
            let resp = browser::send(browser::post(&url).json(&payload)).await?;
            browser::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, student: &NewStudent) -> Result<RegisterResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint(REGISTER_PATH);
            let resp = browser::send(browser::post(&url).json(student)).await?;
            browser::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = student;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint(LOGOUT_PATH);
            browser::send(browser::get(&url).build()).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
