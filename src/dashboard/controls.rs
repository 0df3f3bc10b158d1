//! Snapshots of the control values a tab handler reads on each invocation

use chrono::NaiveDate;
use serde::de::{self, DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};

use crate::filter::Selection;

/// What caused a handler to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Trigger {
    Click { n_clicks: u64 },
    Tick { n_intervals: u64 },
    ControlChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerSource {
    Click,
    Tick,
    Control,
}

/// Raw trigger fields as they arrive in a request query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TriggerParams {
    #[serde(deserialize_with = "blank_as_none")]
    pub source: Option<TriggerSource>,
    #[serde(deserialize_with = "blank_as_zero")]
    pub n_clicks: u64,
    #[serde(deserialize_with = "blank_as_zero")]
    pub n_intervals: u64,
}

impl From<TriggerParams> for Trigger {
    fn from(params: TriggerParams) -> Self {
        match params.source {
            Some(TriggerSource::Click) => Trigger::Click {
                n_clicks: params.n_clicks,
            },
            Some(TriggerSource::Tick) => Trigger::Tick {
                n_intervals: params.n_intervals,
            },
            Some(TriggerSource::Control) | None => Trigger::ControlChanged,
        }
    }
}

// A cleared form field arrives as `key=`; treat it like an absent one.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => T::deserialize(raw.into_deserializer()).map(Some),
    }
}

fn blank_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(0),
        Some(raw) if raw.is_empty() => Ok(0),
        Some(raw) => raw.parse().map_err(de::Error::custom),
    }
}

pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 19).unwrap_or_default()
}

pub fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 25).unwrap_or_default()
}

/// Itinerary planner controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraryControls {
    /// Free-text attraction search
    pub search: Option<String>,
    pub category: Selection,
    /// Travel dates. Shown in the layout but not used to filter attractions.
    #[serde(deserialize_with = "blank_as_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "blank_as_none")]
    pub end_date: Option<NaiveDate>,
}

impl Default for ItineraryControls {
    fn default() -> Self {
        Self {
            search: None,
            category: Selection::All,
            start_date: Some(default_start_date()),
            end_date: Some(default_end_date()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportControls {
    pub transport_type: Selection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyControls {
    pub safety_type: Selection,
}

/// Control values of every tab at one moment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlSnapshot {
    pub itinerary: ItineraryControls,
    pub transport: TransportControls,
    pub safety: SafetyControls,
}
