//! Public transport status model

use serde::{Deserialize, Serialize};

/// Live running status of a transit point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransitStatus {
    OnTime,
    Delayed,
    Other(String),
}

impl TransitStatus {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            TransitStatus::OnTime => "On Time",
            TransitStatus::Delayed => "Delayed",
            TransitStatus::Other(label) => label,
        }
    }

    #[must_use]
    pub fn is_on_time(&self) -> bool {
        matches!(self, TransitStatus::OnTime)
    }
}

impl From<String> for TransitStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "On Time" => TransitStatus::OnTime,
            "Delayed" => TransitStatus::Delayed,
            _ => TransitStatus::Other(label),
        }
    }
}

impl From<TransitStatus> for String {
    fn from(status: TransitStatus) -> Self {
        status.label().to_string()
    }
}

/// Mode of transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransitKind {
    Train,
    Bus,
    Subway,
    Other(String),
}

impl TransitKind {
    pub const KNOWN: [TransitKind; 3] = [TransitKind::Train, TransitKind::Bus, TransitKind::Subway];

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            TransitKind::Train => "Train",
            TransitKind::Bus => "Bus",
            TransitKind::Subway => "Subway",
            TransitKind::Other(label) => label,
        }
    }
}

impl From<String> for TransitKind {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Train" => TransitKind::Train,
            "Bus" => TransitKind::Bus,
            "Subway" => TransitKind::Subway,
            _ => TransitKind::Other(label),
        }
    }
}

impl From<TransitKind> for String {
    fn from(kind: TransitKind) -> Self {
        kind.label().to_string()
    }
}

/// A station, stop or vehicle with its current status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitPoint {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub status: TransitStatus,
    #[serde(rename = "type")]
    pub kind: TransitKind,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub next_arrival: Option<String>,
}
