use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{Endpoint, Upstream};
use crate::config::UpstreamConfig;
use crate::error::FetchError;

/// Upstream API reached over HTTP
pub struct HttpUpstream {
    client: Client,
    base_url: String,
}

impl HttpUpstream {
    /// Create a new client. Without a configured timeout reqwest's own limits apply.
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn get(&self, endpoint: Endpoint) -> Result<String, FetchError> {
        let url = self.url(endpoint);
        debug!("Calling the API: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(endpoint, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(endpoint, &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TravelHubConfig;

    #[test]
    fn test_url_joins_base_and_path() {
        let mut config = TravelHubConfig::default().upstream;
        config.base_url = "http://localhost:9000/".to_string();
        let upstream = HttpUpstream::new(&config).unwrap();
        assert_eq!(
            upstream.url(Endpoint::WeatherForecast),
            "http://localhost:9000/weather_forecast"
        );
    }

    #[test]
    fn test_client_creation_with_default_config() {
        let config = TravelHubConfig::default();
        let upstream = HttpUpstream::new(&config.upstream).unwrap();
        assert_eq!(upstream.url(Endpoint::Travel), "https://api.example.com/travel");
    }
}
