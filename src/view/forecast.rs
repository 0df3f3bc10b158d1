//! Forecast bar chart

use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::models::ForecastDay;

pub const BAR_COLOR: &str = "#2980b9";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    /// Legend entry
    pub name: String,
    pub marker_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub title: String,
    pub xaxis_title: String,
    pub yaxis_title: String,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub data: Vec<BarTrace>,
    pub layout: ChartLayout,
}

/// One bar per day: date on x, temperature as height, condition as legend label
pub fn forecast_chart(days: &[ForecastDay], style: &MapConfig) -> BarChart {
    let data = days
        .iter()
        .map(|day| BarTrace {
            trace_type: "bar".to_string(),
            x: vec![day.date.to_string()],
            y: vec![day.temp],
            name: day.condition.clone(),
            marker_color: BAR_COLOR.to_string(),
        })
        .collect();

    BarChart {
        data,
        layout: ChartLayout {
            title: "7-Day Weather Forecast".to_string(),
            xaxis_title: "Date".to_string(),
            yaxis_title: "Temperature (°C)".to_string(),
            paper_bgcolor: style.background.clone(),
            plot_bgcolor: style.background.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fallback;

    #[test]
    fn test_one_bar_per_day() {
        let chart = forecast_chart(&fallback::forecast(), &MapConfig::default());
        assert_eq!(chart.data.len(), 2);

        assert_eq!(chart.data[0].x, vec!["2024-07-19"]);
        assert_eq!(chart.data[0].y, vec![30.0]);
        assert_eq!(chart.data[0].name, "Sunny");
        assert_eq!(chart.data[1].name, "Partly Cloudy");
        assert!(chart.data.iter().all(|bar| bar.marker_color == BAR_COLOR));
    }

    #[test]
    fn test_empty_forecast_keeps_layout() {
        let chart = forecast_chart(&[], &MapConfig::default());
        assert!(chart.data.is_empty());
        assert_eq!(chart.layout.title, "7-Day Weather Forecast");
        assert_eq!(chart.layout.yaxis_title, "Temperature (°C)");
    }
}
