use crate::models::EarthquakeEvent;

/// Debug formatting keeps the decimal point on whole numbers ("6.0", not "6")
pub fn earthquake_alert(quake: &EarthquakeEvent) -> String {
    format!(
        "Magnitude {:?} earthquake at {} near ({:?}, {:?})",
        quake.magnitude, quake.time, quake.lat, quake.lon
    )
}

pub fn earthquake_alerts(quakes: &[EarthquakeEvent]) -> Vec<String> {
    quakes.iter().map(earthquake_alert).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fallback;

    #[test]
    fn test_fallback_quake_alert() {
        let alerts = earthquake_alerts(&fallback::earthquakes());
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("5.2"));
        assert_eq!(
            alerts[0],
            "Magnitude 5.2 earthquake at 2024-07-18 12:34 near (36.2048, 138.2529)"
        );
    }

    #[test]
    fn test_whole_numbers_keep_decimal_point() {
        let quake = EarthquakeEvent {
            magnitude: 6.0,
            lat: 35.0,
            lon: 139.0,
            time: "2024-08-08 16:42".to_string(),
        };
        assert_eq!(
            earthquake_alert(&quake),
            "Magnitude 6.0 earthquake at 2024-08-08 16:42 near (35.0, 139.0)"
        );
    }

    #[test]
    fn test_no_quakes_no_alerts() {
        assert!(earthquake_alerts(&[]).is_empty());
    }
}
