//! Data models for the travel hub
//!
//! Flat, ephemeral records as delivered by the upstream APIs:
//! - Attraction: sightseeing spots for the itinerary planner
//! - Transit: stations and lines with live status
//! - Safety: hospitals, police and fire stations
//! - Weather: current reading, daily forecast and earthquake events

pub mod attraction;
pub mod safety;
pub mod transit;
pub mod weather;

pub use attraction::{Attraction, Category};
pub use safety::{SafetyFacility, SafetyKind};
pub use transit::{TransitKind, TransitPoint, TransitStatus};
pub use weather::{EarthquakeEvent, ForecastDay, WeatherSnapshot};
