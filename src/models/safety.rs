//! Emergency and safety facility model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SafetyKind {
    Hospital,
    PoliceStation,
    FireStation,
    Other(String),
}

impl SafetyKind {
    pub const KNOWN: [SafetyKind; 3] = [
        SafetyKind::Hospital,
        SafetyKind::PoliceStation,
        SafetyKind::FireStation,
    ];

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            SafetyKind::Hospital => "Hospital",
            SafetyKind::PoliceStation => "Police Station",
            SafetyKind::FireStation => "Fire Station",
            SafetyKind::Other(label) => label,
        }
    }
}

impl From<String> for SafetyKind {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Hospital" => SafetyKind::Hospital,
            "Police Station" => SafetyKind::PoliceStation,
            "Fire Station" => SafetyKind::FireStation,
            _ => SafetyKind::Other(label),
        }
    }
}

impl From<SafetyKind> for String {
    fn from(kind: SafetyKind) -> Self {
        kind.label().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyFacility {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "type")]
    pub kind: SafetyKind,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
}
