//! OpenWeather client
//!
//! Queries current conditions and the 5-day forecast. Without an API key
//! the client serves a fixed stub summary so the advisory routes keep
//! working in development and demos.

use krishi_common::Error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// OpenWeather current-conditions endpoint
const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
/// OpenWeather 5-day / 3-hour forecast endpoint
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Default timeout for OpenWeather API requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Forecast slots to inspect for rain: 8 x 3h = the next 24 hours
const FORECAST_RAIN_SLOTS: usize = 8;

/// Where to query weather for
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Coords { lat: f64, lon: f64 },
    City(String),
}

impl Location {
    /// Build a location from optional query parts; coordinates win over city
    pub fn from_parts(lat: Option<f64>, lon: Option<f64>, city: Option<String>) -> Option<Location> {
        match (lat, lon, city) {
            (Some(lat), Some(lon), _) => Some(Location::Coords { lat, lon }),
            (_, _, Some(city)) if !city.is_empty() => Some(Location::City(city)),
            _ => None,
        }
    }
}

/// Weather summary exposed to the advisory routes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherSummary {
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    #[serde(rename = "rainProb")]
    pub rain_prob: f64,
}

/// OpenWeather client
#[derive(Clone)]
pub struct WeatherClient {
    http_client: Client,
    api_key: Option<String>,
}

impl WeatherClient {
    /// Create a client; `api_key = None` pins the stub path
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            api_key,
        }
    }

    /// Whether a real API key is configured
    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fixed summary served when no API key is configured
    pub fn stub_summary() -> WeatherSummary {
        WeatherSummary {
            temp: Some(30.0),
            humidity: Some(60.0),
            rain_prob: 0.2,
        }
    }

    /// Fetch current conditions for a location.
    ///
    /// Rain probability is a coarse estimate: 0.7 when OpenWeather reports
    /// any rain in the last hour, 0.1 otherwise.
    pub async fn current(&self, location: &Location) -> Result<WeatherSummary, Error> {
        let Some(ref key) = self.api_key else {
            return Ok(Self::stub_summary());
        };

        let mut request = self
            .http_client
            .get(CURRENT_URL)
            .query(&[("appid", key.as_str()), ("units", "metric")]);
        request = match location {
            Location::Coords { lat, lon } => {
                request.query(&[("lat", lat.to_string()), ("lon", lon.to_string())])
            }
            Location::City(city) => request.query(&[("q", city.as_str())]),
        };

        let response = request
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("OpenWeather request failed: {}", e)))?;
        let body: CurrentResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to parse OpenWeather response: {}", e)))?;

        let recent_rain = body
            .rain
            .as_ref()
            .and_then(|r| r.one_hour)
            .unwrap_or(0.0);
        let summary = WeatherSummary {
            temp: body.main.as_ref().and_then(|m| m.temp),
            humidity: body.main.as_ref().and_then(|m| m.humidity),
            rain_prob: if recent_rain > 0.0 { 0.7 } else { 0.1 },
        };

        debug!(?location, ?summary, "Fetched current weather");
        Ok(summary)
    }

    /// Whether rain is expected within the next 24 hours.
    ///
    /// Forecast failures are swallowed: irrigation advice proceeds on
    /// moisture alone when the forecast is unavailable.
    pub async fn forecast_rain(&self, location: &Location) -> bool {
        let Some(ref key) = self.api_key else {
            return false;
        };

        let mut request = self
            .http_client
            .get(FORECAST_URL)
            .query(&[("appid", key.as_str())]);
        request = match location {
            Location::Coords { lat, lon } => {
                request.query(&[("lat", lat.to_string()), ("lon", lon.to_string())])
            }
            Location::City(city) => request.query(&[("q", city.as_str())]),
        };

        let body: Result<ForecastResponse, _> = match request.send().await {
            Ok(response) => response.json().await,
            Err(e) => {
                warn!("OpenWeather forecast request failed: {}", e);
                return false;
            }
        };

        match body {
            Ok(forecast) => forecast
                .list
                .iter()
                .take(FORECAST_RAIN_SLOTS)
                .any(|slot| {
                    slot.rain
                        .as_ref()
                        .and_then(|r| r.three_hour)
                        .unwrap_or(0.0)
                        > 0.0
                }),
            Err(e) => {
                warn!("Failed to parse OpenWeather forecast: {}", e);
                false
            }
        }
    }
}

// ============================================================================
// OpenWeather API Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    main: Option<MainBlock>,
    rain: Option<RainBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RainBlock {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    list: Vec<ForecastSlot>,
}

#[derive(Debug, Deserialize)]
struct ForecastSlot {
    rain: Option<RainBlock>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_prefers_coordinates() {
        let loc = Location::from_parts(Some(18.5), Some(73.8), Some("Pune".to_string()));
        assert_eq!(
            loc,
            Some(Location::Coords {
                lat: 18.5,
                lon: 73.8
            })
        );
    }

    #[test]
    fn test_location_falls_back_to_city() {
        let loc = Location::from_parts(Some(18.5), None, Some("Pune".to_string()));
        assert_eq!(loc, Some(Location::City("Pune".to_string())));
    }

    #[test]
    fn test_location_missing() {
        assert_eq!(Location::from_parts(None, None, None), None);
        assert_eq!(Location::from_parts(None, None, Some(String::new())), None);
    }

    #[test]
    fn test_stub_summary_values() {
        let stub = WeatherClient::stub_summary();
        assert_eq!(stub.temp, Some(30.0));
        assert_eq!(stub.humidity, Some(60.0));
        assert_eq!(stub.rain_prob, 0.2);
    }

    #[tokio::test]
    async fn test_current_without_key_returns_stub() {
        let client = WeatherClient::new(None);
        let summary = client
            .current(&Location::City("Pune".to_string()))
            .await
            .unwrap();
        assert_eq!(summary, WeatherClient::stub_summary());
    }

    #[tokio::test]
    async fn test_forecast_without_key_reports_no_rain() {
        let client = WeatherClient::new(None);
        assert!(!client.forecast_rain(&Location::City("Pune".to_string())).await);
    }

    #[test]
    fn test_forecast_parsing_reads_3h_rain() {
        let json = r#"{"list":[{"rain":{"3h":0.4}},{"rain":{}},{}]}"#;
        let forecast: ForecastResponse = serde_json::from_str(json).unwrap();
        assert_eq!(forecast.list.len(), 3);
        assert_eq!(forecast.list[0].rain.as_ref().unwrap().three_hour, Some(0.4));
        assert!(forecast.list[1].rain.as_ref().unwrap().three_hour.is_none());
    }

    #[test]
    fn test_current_parsing_tolerates_missing_blocks() {
        let body: CurrentResponse = serde_json::from_str("{}").unwrap();
        assert!(body.main.is_none());
        assert!(body.rain.is_none());
    }

    #[test]
    fn test_summary_serializes_rain_prob_key() {
        let json = serde_json::to_value(WeatherClient::stub_summary()).unwrap();
        assert_eq!(json["rainProb"], 0.2);
        assert_eq!(json["temp"], 30.0);
    }
}
