use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;

use crate::types::{PollError, PollKind};

/// Connection parameters for the polling endpoint.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    pub token: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl FetchSettings {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// One poll round-trip: everything reviewed at or after `cursor`
    /// (epoch seconds), as the raw JSON answer.
    async fn fetch(&self, cursor: i64) -> Result<serde_json::Value, PollError>;
}

/// Production fetcher against the review API.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, PollError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| PollError::new(PollKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, cursor: i64) -> Result<serde_json::Value, PollError> {
        let response = self
            .client
            .get(&self.settings.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.settings.token))
            .query(&[("from_date", cursor)])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::new(
                PollKind::HttpStatus(status.as_u16()),
                format!("endpoint {} answered {}", self.settings.endpoint, status),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        if body.is_empty() {
            return Err(PollError::new(
                PollKind::EmptyAnswer,
                "endpoint answered with an empty body",
            ));
        }
        serde_json::from_slice(&body)
            .map_err(|err| PollError::new(PollKind::MalformedShape, format!("body is not JSON: {err}")))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> PollError {
    if err.is_timeout() {
        return PollError::new(PollKind::Timeout, err.to_string());
    }
    PollError::new(PollKind::Network, err.to_string())
}
