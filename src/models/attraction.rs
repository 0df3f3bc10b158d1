//! Attraction model for the itinerary planner

use serde::{Deserialize, Serialize};

/// Attraction category as shown in the category dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Historical,
    Nature,
    Modern,
    Shopping,
    Food,
    /// Any label the upstream sends that we do not know about
    Other(String),
}

impl Category {
    /// Every known category in dropdown order
    pub const KNOWN: [Category; 5] = [
        Category::Historical,
        Category::Nature,
        Category::Modern,
        Category::Shopping,
        Category::Food,
    ];

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Category::Historical => "Historical",
            Category::Nature => "Nature",
            Category::Modern => "Modern",
            Category::Shopping => "Shopping",
            Category::Food => "Food",
            Category::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Historical" => Category::Historical,
            "Nature" => Category::Nature,
            "Modern" => Category::Modern,
            "Shopping" => Category::Shopping,
            "Food" => Category::Food,
            _ => Category::Other(label),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

/// A must-visit place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub category: Category,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub ticket_price: Option<String>,
}
