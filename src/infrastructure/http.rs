//! HTTP clients for the quote and weather services
//!
//! The runtime only sees the [`QuoteSource`] and [`WeatherSource`] traits so
//! the clients can be replaced in tests.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use thiserror::Error;

use crate::{
    domain::{
        fetch::FetchFailure,
        quote::QuoteResponse,
        weather::{WeatherResponse, UNITS},
    },
    infrastructure::config::{QuoteConfig, WeatherConfig},
};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("could not decode response body: {0}")]
    Malformed(#[source] reqwest::Error),
}

impl FetchError {
    pub fn failure(&self) -> FetchFailure {
        match self {
            FetchError::Transport(e) => FetchFailure::Transport(e.to_string()),
            FetchError::Status(code) => FetchFailure::Status(*code),
            FetchError::Malformed(e) => FetchFailure::Malformed(e.to_string()),
        }
    }
}

impl From<FetchError> for FetchFailure {
    fn from(value: FetchError) -> Self {
        value.failure()
    }
}

#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self) -> Result<QuoteResponse, FetchError>;
}

#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResponse, FetchError>;
}

/// Send a GET and decode the body as JSON, classifying failures
async fn get_json(request: RequestBuilder) -> Result<Value, FetchError> {
    let response = request.send().await.map_err(FetchError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    response.json::<Value>().await.map_err(FetchError::Malformed)
}

#[derive(Clone)]
pub struct HttpQuoteClient {
    client: Client,
    endpoint: String,
}

impl HttpQuoteClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(client: Client, config: &QuoteConfig) -> Self {
        Self::new(client, config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteClient {
    async fn fetch_quote(&self) -> Result<QuoteResponse, FetchError> {
        log::debug!("GET {}", self.endpoint);
        let body = get_json(self.client.get(&self.endpoint)).await?;
        Ok(QuoteResponse::from_value(&body))
    }
}

#[derive(Clone)]
pub struct HttpWeatherClient {
    client: Client,
    endpoint: String,
    api_key: SecretString,
}

impl HttpWeatherClient {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        }
    }

    /// Build from config. A missing key is sent as an empty `appid`, which
    /// the service answers with 401.
    pub fn from_config(client: Client, config: &WeatherConfig) -> Self {
        let api_key = config
            .api_key
            .clone()
            .unwrap_or_else(|| SecretString::from(""));
        Self::new(client, config.endpoint.clone(), api_key)
    }
}

#[async_trait]
impl WeatherSource for HttpWeatherClient {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResponse, FetchError> {
        log::debug!("GET {} (q={city})", self.endpoint);
        let request = self.client.get(&self.endpoint).query(&[
            ("q", city),
            ("appid", self.api_key.expose_secret()),
            ("units", UNITS),
        ]);
        let body = get_json(request).await?;
        Ok(WeatherResponse::from_value(&body))
    }
}
