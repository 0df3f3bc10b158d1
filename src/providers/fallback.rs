//! Static datasets served when the upstream API is unavailable

use chrono::NaiveDate;

use crate::models::{
    Attraction, Category, EarthquakeEvent, ForecastDay, SafetyFacility, SafetyKind, TransitKind,
    TransitPoint, TransitStatus, WeatherSnapshot,
};

pub fn attractions() -> Vec<Attraction> {
    vec![
        Attraction {
            name: "Tokyo Tower".to_string(),
            lat: 35.6586,
            lon: 139.7454,
            category: Category::Modern,
            description: Some("A famous landmark".to_string()),
            opening_hours: Some("9:00 AM - 11:00 PM".to_string()),
            ticket_price: Some("Adult: 1200 yen, Child: 500 yen".to_string()),
        },
        Attraction {
            name: "Senso-ji Temple".to_string(),
            lat: 35.7148,
            lon: 139.7967,
            category: Category::Historical,
            description: Some("An ancient Buddhist temple".to_string()),
            opening_hours: Some("6:00 AM - 5:00 PM".to_string()),
            ticket_price: Some("Free".to_string()),
        },
    ]
}

pub fn transit_points() -> Vec<TransitPoint> {
    vec![
        TransitPoint {
            name: "Train 1".to_string(),
            lat: 35.6814,
            lon: 139.7670,
            status: TransitStatus::OnTime,
            kind: TransitKind::Train,
            platform: Some("2".to_string()),
            next_arrival: Some("5 mins".to_string()),
        },
        TransitPoint {
            name: "Bus 22".to_string(),
            lat: 35.6895,
            lon: 139.6917,
            status: TransitStatus::Delayed,
            kind: TransitKind::Bus,
            platform: Some("N/A".to_string()),
            next_arrival: Some("15 mins".to_string()),
        },
    ]
}

pub fn safety_facilities() -> Vec<SafetyFacility> {
    vec![
        SafetyFacility {
            name: "Hospital".to_string(),
            lat: 35.6895,
            lon: 139.6917,
            kind: SafetyKind::Hospital,
            contact: Some("03-1234-5678".to_string()),
            hours: Some("24/7".to_string()),
        },
        SafetyFacility {
            name: "Police Station".to_string(),
            lat: 35.6828,
            lon: 139.7595,
            kind: SafetyKind::PoliceStation,
            contact: Some("03-8765-4321".to_string()),
            hours: Some("24/7".to_string()),
        },
    ]
}

pub fn weather() -> WeatherSnapshot {
    WeatherSnapshot {
        lat: 35.6828,
        lon: 139.7595,
        temp: 30.0,
        condition: "Sunny".to_string(),
    }
}

pub fn earthquakes() -> Vec<EarthquakeEvent> {
    vec![EarthquakeEvent {
        magnitude: 5.2,
        lat: 36.2048,
        lon: 138.2529,
        time: "2024-07-18 12:34".to_string(),
    }]
}

pub fn forecast() -> Vec<ForecastDay> {
    vec![
        ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 7, 19).unwrap_or_default(),
            temp: 30.0,
            condition: "Sunny".to_string(),
        },
        ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 7, 20).unwrap_or_default(),
            temp: 28.0,
            condition: "Partly Cloudy".to_string(),
        },
    ]
}
