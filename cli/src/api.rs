//! `reqwest`-backed [`LeadsApi`] for running the controller outside a browser.
//!
//! The server authenticates with its session cookie. `--session` supplies the
//! cookie value; it is sent as `Cookie: session=<value>` on every request. No
//! timeout is configured, matching the browser's `fetch`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leadboard::{ControllerConfig, HttpReply, LeadsApi, NewLead, TransportError};
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};

use crate::error::CliError;

pub const SESSION_COOKIE: &str = "session";

pub struct ReqwestLeadsApi {
    http: reqwest::Client,
    url: String,
}

impl ReqwestLeadsApi {
    /// Build a client for `base_url` + the configured leads endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] for a non-HTTP base URL, or an
    /// error if the session cookie is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str, session: Option<&str>, config: &ControllerConfig) -> Result<Self, CliError> {
        validate_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        if let Some(session) = session {
            headers.insert(COOKIE, HeaderValue::from_str(&session_cookie(session))?);
        }
        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self { http, url: endpoint_url(base_url, config.leads_endpoint()) })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn reply(response: reqwest::Response) -> Result<HttpReply, TransportError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}

#[async_trait::async_trait(?Send)]
impl LeadsApi for ReqwestLeadsApi {
    async fn list_leads(&self) -> Result<HttpReply, TransportError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Self::reply(response).await
    }

    async fn create_lead(&self, lead: &NewLead) -> Result<HttpReply, TransportError> {
        let response = self
            .http
            .post(&self.url)
            .json(lead)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Self::reply(response).await
    }
}

/// Join a base URL and an origin-relative path without doubling the slash.
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

fn session_cookie(value: &str) -> String {
    format!("{SESSION_COOKIE}={}", value.trim())
}

fn validate_base_url(base_url: &str) -> Result<(), CliError> {
    let invalid = |reason: String| CliError::InvalidBaseUrl { url: base_url.to_owned(), reason };
    let parsed = reqwest::Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme `{other}`"))),
    }
}
