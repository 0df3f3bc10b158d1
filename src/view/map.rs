//! Map layers for the attraction, transport, safety and weather tabs

use super::{MARKER_SIZE, MapFigure, MapLayer, MapLayout, Marker, MarkerColor};
use crate::models::{Attraction, SafetyFacility, TransitPoint, TransitStatus, WeatherSnapshot};

const NOT_AVAILABLE: &str = "N/A";

fn layer<T>(
    records: &[T],
    position: impl Fn(&T) -> (f64, f64),
    tooltip: impl Fn(&T) -> String,
    color: MarkerColor,
    symbol: Option<&str>,
) -> MapLayer {
    let (lat, lon): (Vec<f64>, Vec<f64>) = records.iter().map(&position).unzip();
    MapLayer {
        trace_type: "scattermapbox".to_string(),
        mode: "markers".to_string(),
        lat,
        lon,
        marker: Marker {
            size: MARKER_SIZE,
            color,
            symbol: symbol.map(str::to_string),
        },
        text: records.iter().map(tooltip).collect(),
    }
}

pub fn attraction_tooltip(place: &Attraction) -> String {
    format!(
        "{}<br>{}<br>Open: {}<br>Price: {}",
        place.name,
        place.description.as_deref().unwrap_or_default(),
        place.opening_hours.as_deref().unwrap_or(NOT_AVAILABLE),
        place.ticket_price.as_deref().unwrap_or("Free"),
    )
}

pub fn transit_tooltip(point: &TransitPoint) -> String {
    format!(
        "{} - {}<br>Platform: {}<br>Next Arrival: {}",
        point.name,
        point.status.label(),
        point.platform.as_deref().unwrap_or(NOT_AVAILABLE),
        point.next_arrival.as_deref().unwrap_or(NOT_AVAILABLE),
    )
}

pub fn safety_tooltip(place: &SafetyFacility) -> String {
    format!(
        "{}<br>Contact: {}<br>Hours: {}",
        place.name,
        place.contact.as_deref().unwrap_or(NOT_AVAILABLE),
        place.hours.as_deref().unwrap_or(NOT_AVAILABLE),
    )
}

pub fn weather_tooltip(weather: &WeatherSnapshot) -> String {
    format!("Temp: {:?}°C, Condition: {}", weather.temp, weather.condition)
}

/// Green when running on time, red for anything else
#[must_use]
pub fn status_color(status: &TransitStatus) -> &'static str {
    if status.is_on_time() { "green" } else { "red" }
}

pub fn attractions_map(attractions: &[Attraction], layout: MapLayout) -> MapFigure {
    MapFigure {
        data: vec![layer(
            attractions,
            |a| (a.lat, a.lon),
            attraction_tooltip,
            MarkerColor::Uniform("blue".to_string()),
            Some("marker"),
        )],
        layout,
    }
}

pub fn transport_map(points: &[TransitPoint], layout: MapLayout) -> MapFigure {
    let colors = points
        .iter()
        .map(|p| status_color(&p.status).to_string())
        .collect();
    MapFigure {
        data: vec![layer(
            points,
            |p| (p.lat, p.lon),
            transit_tooltip,
            MarkerColor::PerPoint(colors),
            None,
        )],
        layout,
    }
}

pub fn safety_map(facilities: &[SafetyFacility], layout: MapLayout) -> MapFigure {
    MapFigure {
        data: vec![layer(
            facilities,
            |f| (f.lat, f.lon),
            safety_tooltip,
            MarkerColor::Uniform("blue".to_string()),
            Some("hospital"),
        )],
        layout,
    }
}

pub fn weather_map(weather: &WeatherSnapshot, layout: MapLayout) -> MapFigure {
    MapFigure {
        data: vec![layer(
            std::slice::from_ref(weather),
            |w| (w.lat, w.lon),
            weather_tooltip,
            MarkerColor::Uniform("orange".to_string()),
            None,
        )],
        layout,
    }
}
