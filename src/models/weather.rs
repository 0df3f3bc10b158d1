//! Weather, forecast and earthquake models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Single current weather reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub lat: f64,
    pub lon: f64,
    /// Temperature in Celsius
    pub temp: f64,
    pub condition: String,
}

/// One day of the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// Temperature in Celsius
    pub temp: f64,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeEvent {
    pub magnitude: f64,
    pub lat: f64,
    pub lon: f64,
    /// Local time as reported upstream, e.g. `2024-07-18 12:34`
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_temperature_decodes() {
        let json = r#"{"date": "2024-07-21", "temp": 27, "condition": "Rain"}"#;
        let day: ForecastDay = serde_json::from_str(json).unwrap();
        assert_eq!(day.temp, 27.0);
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 7, 21).unwrap());
    }

    #[test]
    fn test_non_iso_date_is_rejected() {
        let json = r#"{"date": "21/07/2024", "temp": 27, "condition": "Rain"}"#;
        assert!(serde_json::from_str::<ForecastDay>(json).is_err());
    }
}
