//! Dashboard layout: tabs, their controls, panels and polling intervals
//!
//! The layout is data. A front-end renders it; the server and the headless
//! watcher read the polling intervals from it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::TravelHubConfig;
use crate::filter::ALL;
use crate::models::{Category, SafetyKind, TransitKind};

use super::controls::{default_end_date, default_start_date};

pub const TITLE: &str = "Cat's Japan Travel Hub, Meow!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Attractions,
    Transport,
    Safety,
    Weather,
}

impl Tab {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Tab::Attractions => "attractions",
            Tab::Transport => "transport",
            Tab::Safety => "safety",
            Tab::Weather => "weather",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Attractions => "Itinerary Planner",
            Tab::Transport => "Public Transportation Navigator",
            Tab::Safety => "Emergency and Safety Information",
            Tab::Weather => "Weather and Natural Disasters",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Control {
    TextInput {
        id: String,
        placeholder: String,
        width_px: u32,
    },
    Dropdown {
        id: String,
        options: Vec<String>,
        value: String,
        width_px: u32,
    },
    DateRange {
        id: String,
        start_date: String,
        end_date: String,
    },
    Button {
        id: String,
        label: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    Heading { text: String },
    Graph { id: String },
    AlertList { id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polling {
    pub id: String,
    pub interval_ms: u64,
}

impl Polling {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabLayout {
    pub tab: Tab,
    pub label: String,
    pub heading: String,
    pub controls: Vec<Control>,
    pub panels: Vec<Panel>,
    pub polling: Polling,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub tabs: Vec<TabLayout>,
}

/// Dropdown options with the "All" sentinel first
fn options<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    std::iter::once(ALL)
        .chain(labels)
        .map(str::to_string)
        .collect()
}

fn dropdown(id: &str, options: Vec<String>) -> Control {
    Control::Dropdown {
        id: id.to_string(),
        options,
        value: ALL.to_string(),
        width_px: 200,
    }
}

fn graph(id: &str) -> Panel {
    Panel::Graph { id: id.to_string() }
}

fn heading(text: &str) -> Panel {
    Panel::Heading {
        text: text.to_string(),
    }
}

/// Assemble the four-tab layout
pub fn compose(config: &TravelHubConfig) -> DashboardLayout {
    let interval_ms = config.polling.interval().as_millis() as u64;
    let polling = |tab: Tab| Polling {
        id: format!("interval-{}", tab.id()),
        interval_ms,
    };

    let attractions = TabLayout {
        tab: Tab::Attractions,
        label: Tab::Attractions.label().to_string(),
        heading: "Must-Visit Attractions".to_string(),
        controls: vec![
            Control::TextInput {
                id: "attraction-filter".to_string(),
                placeholder: "Search for attractions".to_string(),
                width_px: 300,
            },
            dropdown(
                "category-dropdown",
                options(Category::KNOWN.iter().map(Category::label)),
            ),
            Control::DateRange {
                id: "date-picker-range".to_string(),
                start_date: default_start_date().to_string(),
                end_date: default_end_date().to_string(),
            },
            Control::Button {
                id: "submit-button".to_string(),
                label: "Search".to_string(),
            },
        ],
        panels: vec![graph("attractions-map")],
        polling: polling(Tab::Attractions),
    };

    let transport = TabLayout {
        tab: Tab::Transport,
        label: Tab::Transport.label().to_string(),
        heading: "Public Transportation Status".to_string(),
        controls: vec![dropdown(
            "transport-type-dropdown",
            options(TransitKind::KNOWN.iter().map(TransitKind::label)),
        )],
        panels: vec![graph("transport-map")],
        polling: polling(Tab::Transport),
    };

    let safety = TabLayout {
        tab: Tab::Safety,
        label: Tab::Safety.label().to_string(),
        heading: "Emergency and Safety Information".to_string(),
        controls: vec![dropdown(
            "safety-type-dropdown",
            options(SafetyKind::KNOWN.iter().map(SafetyKind::label)),
        )],
        panels: vec![graph("safety-map")],
        polling: polling(Tab::Safety),
    };

    let weather = TabLayout {
        tab: Tab::Weather,
        label: Tab::Weather.label().to_string(),
        heading: "Local Weather and Earthquake Alerts".to_string(),
        controls: Vec::new(),
        panels: vec![
            graph("weather-map"),
            heading("7-Day Weather Forecast"),
            graph("weather-forecast"),
            heading("Recent Earthquakes"),
            Panel::AlertList {
                id: "earthquake-alerts".to_string(),
            },
        ],
        polling: polling(Tab::Weather),
    };

    DashboardLayout {
        title: TITLE.to_string(),
        tabs: vec![attractions, transport, safety, weather],
    }
}
