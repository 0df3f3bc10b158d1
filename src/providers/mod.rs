//! Domain data providers
//!
//! Every data domain sits behind the same facade: one GET request against the
//! upstream API, decoded into the domain's record shape, and on *any* failure
//! the domain's static fallback dataset instead. Callers never see an error.
//!
//! The failure policy is kept apart from the network I/O: [`Upstream`] returns
//! an explicit `Result`, and [`settle`] is the pure function turning that
//! result into data.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::models::{
    Attraction, EarthquakeEvent, ForecastDay, SafetyFacility, TransitPoint, WeatherSnapshot,
};

pub mod fallback;
pub mod http;

pub use http::HttpUpstream;

/// Upstream GET endpoints, one per domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Travel,
    Transport,
    Safety,
    Weather,
    Earthquakes,
    WeatherForecast,
}

impl Endpoint {
    /// Path relative to the upstream base URL
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Travel => "/travel",
            Endpoint::Transport => "/transport",
            Endpoint::Safety => "/safety",
            Endpoint::Weather => "/weather",
            Endpoint::Earthquakes => "/earthquakes",
            Endpoint::WeatherForecast => "/weather_forecast",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Transport seam: a single attempt at fetching the raw body of an endpoint
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn get(&self, endpoint: Endpoint) -> Result<String, FetchError>;
}

/// A data domain: where it lives upstream, what it decodes to, and what to
/// show when the upstream is unavailable.
pub trait Domain: Send + Sync + 'static {
    type Output: DeserializeOwned + Send;

    const ENDPOINT: Endpoint;

    fn fallback() -> Self::Output;
}

pub struct Travel;
pub struct Transport;
pub struct Safety;
pub struct Weather;
pub struct Earthquakes;
pub struct Forecast;

impl Domain for Travel {
    type Output = Vec<Attraction>;
    const ENDPOINT: Endpoint = Endpoint::Travel;

    fn fallback() -> Self::Output {
        fallback::attractions()
    }
}

impl Domain for Transport {
    type Output = Vec<TransitPoint>;
    const ENDPOINT: Endpoint = Endpoint::Transport;

    fn fallback() -> Self::Output {
        fallback::transit_points()
    }
}

impl Domain for Safety {
    type Output = Vec<SafetyFacility>;
    const ENDPOINT: Endpoint = Endpoint::Safety;

    fn fallback() -> Self::Output {
        fallback::safety_facilities()
    }
}

impl Domain for Weather {
    type Output = WeatherSnapshot;
    const ENDPOINT: Endpoint = Endpoint::Weather;

    fn fallback() -> Self::Output {
        fallback::weather()
    }
}

impl Domain for Earthquakes {
    type Output = Vec<EarthquakeEvent>;
    const ENDPOINT: Endpoint = Endpoint::Earthquakes;

    fn fallback() -> Self::Output {
        fallback::earthquakes()
    }
}

impl Domain for Forecast {
    type Output = Vec<ForecastDay>;
    const ENDPOINT: Endpoint = Endpoint::WeatherForecast;

    fn fallback() -> Self::Output {
        fallback::forecast()
    }
}

/// Decode a raw upstream body into the domain's shape
pub fn decode<D: Domain>(body: &str) -> Result<D::Output, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::malformed(D::ENDPOINT, &e))
}

/// Turn the outcome of a fetch into data, substituting the fallback on error.
pub fn settle<D: Domain>(outcome: Result<D::Output, FetchError>) -> D::Output {
    match outcome {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!(endpoint = %err.endpoint(), error = %err, "Error fetching upstream data, using fallback dataset");
            D::fallback()
        }
    }
}

/// Infallible facade over one domain
pub struct DataProvider<D> {
    upstream: Arc<dyn Upstream>,
    _domain: PhantomData<D>,
}

impl<D: Domain> DataProvider<D> {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self {
            upstream,
            _domain: PhantomData,
        }
    }

    /// Fetch the live dataset, or the fallback when anything goes wrong
    #[tracing::instrument(name = "fetch", level = "debug", skip(self), fields(endpoint = %D::ENDPOINT))]
    pub async fn fetch(&self) -> D::Output {
        let outcome = match self.upstream.get(D::ENDPOINT).await {
            Ok(body) => decode::<D>(&body),
            Err(err) => Err(err),
        };
        settle::<D>(outcome)
    }
}

impl<D> Clone for DataProvider<D> {
    fn clone(&self) -> Self {
        Self {
            upstream: Arc::clone(&self.upstream),
            _domain: PhantomData,
        }
    }
}

/// All providers sharing one upstream
#[derive(Clone)]
pub struct Providers {
    pub travel: DataProvider<Travel>,
    pub transport: DataProvider<Transport>,
    pub safety: DataProvider<Safety>,
    pub weather: DataProvider<Weather>,
    pub earthquakes: DataProvider<Earthquakes>,
    pub forecast: DataProvider<Forecast>,
}

impl Providers {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self {
            travel: DataProvider::new(Arc::clone(&upstream)),
            transport: DataProvider::new(Arc::clone(&upstream)),
            safety: DataProvider::new(Arc::clone(&upstream)),
            weather: DataProvider::new(Arc::clone(&upstream)),
            earthquakes: DataProvider::new(Arc::clone(&upstream)),
            forecast: DataProvider::new(upstream),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StubUpstream;
    use super::*;
    use crate::models::Category;
    use rstest::rstest;

    fn timeout() -> FetchError {
        FetchError::Timeout {
            endpoint: Endpoint::Travel,
        }
    }

    fn server_error() -> FetchError {
        FetchError::Status {
            endpoint: Endpoint::Travel,
            status: 500,
        }
    }

    fn malformed() -> FetchError {
        FetchError::Malformed {
            endpoint: Endpoint::Travel,
            message: "expected value at line 1 column 1".to_string(),
        }
    }

    #[rstest]
    #[case::timeout(timeout())]
    #[case::server_error(server_error())]
    #[case::malformed(malformed())]
    fn test_settle_substitutes_fallback(#[case] err: FetchError) {
        assert_eq!(settle::<Travel>(Err(err.clone())), fallback::attractions());
        assert_eq!(settle::<Transport>(Err(err.clone())), fallback::transit_points());
        assert_eq!(settle::<Safety>(Err(err.clone())), fallback::safety_facilities());
        assert_eq!(settle::<Weather>(Err(err.clone())), fallback::weather());
        assert_eq!(settle::<Earthquakes>(Err(err.clone())), fallback::earthquakes());
        assert_eq!(settle::<Forecast>(Err(err)), fallback::forecast());
    }

    #[test]
    fn test_settle_passes_live_data_through() {
        let live = WeatherSnapshot {
            lat: 43.06,
            lon: 141.35,
            temp: 21.5,
            condition: "Cloudy".to_string(),
        };
        assert_eq!(settle::<Weather>(Ok(live.clone())), live);
    }

    #[test]
    fn test_endpoint_paths() {
        let paths: Vec<&str> = [
            Endpoint::Travel,
            Endpoint::Transport,
            Endpoint::Safety,
            Endpoint::Weather,
            Endpoint::Earthquakes,
            Endpoint::WeatherForecast,
        ]
        .iter()
        .map(|e| e.path())
        .collect();
        assert_eq!(
            paths,
            vec!["/travel", "/transport", "/safety", "/weather", "/earthquakes", "/weather_forecast"]
        );
    }

    #[tokio::test]
    async fn test_every_provider_falls_back_when_unreachable() {
        let providers = Providers::new(Arc::new(StubUpstream::unreachable()));

        assert_eq!(providers.travel.fetch().await, fallback::attractions());
        assert_eq!(providers.transport.fetch().await, fallback::transit_points());
        assert_eq!(providers.safety.fetch().await, fallback::safety_facilities());
        assert_eq!(providers.weather.fetch().await, fallback::weather());
        assert_eq!(providers.earthquakes.fetch().await, fallback::earthquakes());
        assert_eq!(providers.forecast.fetch().await, fallback::forecast());
    }

    #[tokio::test]
    async fn test_malformed_body_falls_back() {
        let upstream = StubUpstream::unreachable().ok(Endpoint::Travel, r#"{"not": "a list"}"#);
        let provider = DataProvider::<Travel>::new(Arc::new(upstream));
        assert_eq!(provider.fetch().await, fallback::attractions());
    }

    #[tokio::test]
    async fn test_live_body_is_decoded() {
        let body = r#"[{"name": "Nishiki Market", "lat": 35.005, "lon": 135.764, "category": "Food"}]"#;
        let upstream = StubUpstream::unreachable().ok(Endpoint::Travel, body);
        let provider = DataProvider::<Travel>::new(Arc::new(upstream));

        let attractions = provider.fetch().await;
        assert_eq!(attractions.len(), 1);
        assert_eq!(attractions[0].name, "Nishiki Market");
        assert_eq!(attractions[0].category, Category::Food);
    }

    #[tokio::test]
    async fn test_fetch_is_idempotent() {
        let body = r#"[{"magnitude": 4.1, "lat": 38.27, "lon": 140.87, "time": "2024-07-20 03:10"}]"#;
        let upstream = Arc::new(StubUpstream::unreachable().ok(Endpoint::Earthquakes, body));
        let provider = DataProvider::<Earthquakes>::new(upstream.clone());

        let first = provider.fetch().await;
        let second = provider.fetch().await;
        assert_eq!(first, second);
        assert_eq!(upstream.calls.load(std::sync::atomic::Ordering::SeqCst), 2);

        let failing = DataProvider::<Earthquakes>::new(Arc::new(StubUpstream::unreachable()));
        assert_eq!(failing.fetch().await, failing.fetch().await);
    }
}
