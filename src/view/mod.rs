//! Figure construction
//!
//! Pure mappings from records to renderable structures. The shapes follow the
//! Plotly figure JSON (`data` + `layout`) so a browser front-end can hand them
//! straight to its charting library.

use serde::{Deserialize, Serialize};

use crate::config::MapConfig;

pub mod alerts;
pub mod forecast;
pub mod map;

pub use alerts::earthquake_alerts;
pub use forecast::forecast_chart;
pub use map::{attractions_map, safety_map, transport_map, weather_map};

/// Marker size shared by every map layer
pub const MARKER_SIZE: u32 = 12;

/// Scatter layer on a tile map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayer {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub mode: String,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub marker: Marker,
    pub text: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub size: u32,
    pub color: MarkerColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// One colour for the whole layer, or one per point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Uniform(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapFigure {
    pub data: Vec<MapLayer>,
    pub layout: MapLayout,
}

impl MapFigure {
    /// Number of points across all layers
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.data.iter().map(|layer| layer.lat.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLayout {
    pub mapbox: Mapbox,
    pub margin: Margin,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapbox {
    pub style: String,
    pub center: Center,
    pub zoom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl From<&MapConfig> for MapLayout {
    fn from(config: &MapConfig) -> Self {
        Self {
            mapbox: Mapbox {
                style: config.style.clone(),
                center: Center {
                    lat: config.center_lat,
                    lon: config.center_lon,
                },
                zoom: config.zoom,
            },
            margin: Margin::default(),
            paper_bgcolor: config.background.clone(),
            plot_bgcolor: config.background.clone(),
        }
    }
}

/// Everything the weather tab renders in one pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPanel {
    pub map: MapFigure,
    pub forecast: forecast::BarChart,
    pub earthquake_alerts: Vec<String>,
}
