//! Update handlers, one per tab
//!
//! Each handler is a function of (trigger, control snapshot): fetch through the
//! providers, filter, build the figure. Nothing is remembered between calls.

use serde::Serialize;
use tracing::{debug, info, instrument};

use super::controls::{
    ControlSnapshot, ItineraryControls, SafetyControls, TransportControls, Trigger,
};
use super::layout::Tab;
use crate::config::MapConfig;
use crate::filter::{filter_by_selection, filter_by_text};
use crate::providers::Providers;
use crate::view::{
    self, MapFigure, MapLayout, WeatherPanel, earthquake_alerts, forecast_chart,
};

pub struct Dashboard {
    providers: Providers,
    map: MapConfig,
}

/// Output of one render pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TabRender {
    Map(MapFigure),
    Weather(WeatherPanel),
}

impl TabRender {
    /// Short human-readable description for logs
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            TabRender::Map(figure) => format!("{} map points", figure.point_count()),
            TabRender::Weather(panel) => format!(
                "{} forecast days, {} earthquake alerts",
                panel.forecast.data.len(),
                panel.earthquake_alerts.len()
            ),
        }
    }
}

impl Dashboard {
    pub fn new(providers: Providers, map: MapConfig) -> Self {
        Self { providers, map }
    }

    fn map_layout(&self) -> MapLayout {
        MapLayout::from(&self.map)
    }

    #[instrument(skip(self, controls))]
    pub async fn update_attractions_map(
        &self,
        trigger: Trigger,
        controls: &ItineraryControls,
    ) -> MapFigure {
        let attractions = self.providers.travel.fetch().await;
        let attractions = filter_by_text(attractions, controls.search.as_deref());
        let attractions = filter_by_selection(attractions, &controls.category);
        // TODO: filter by travel dates once attractions carry availability data
        debug!(
            start_date = ?controls.start_date,
            end_date = ?controls.end_date,
            "Date range is not applied to attractions"
        );

        info!(count = attractions.len(), "Rendering attractions map");
        view::attractions_map(&attractions, self.map_layout())
    }

    #[instrument(skip(self, controls))]
    pub async fn update_transport_map(
        &self,
        trigger: Trigger,
        controls: &TransportControls,
    ) -> MapFigure {
        let points = self.providers.transport.fetch().await;
        let points = filter_by_selection(points, &controls.transport_type);

        info!(count = points.len(), "Rendering transport map");
        view::transport_map(&points, self.map_layout())
    }

    #[instrument(skip(self, controls))]
    pub async fn update_safety_map(&self, trigger: Trigger, controls: &SafetyControls) -> MapFigure {
        let facilities = self.providers.safety.fetch().await;
        let facilities = filter_by_selection(facilities, &controls.safety_type);

        info!(count = facilities.len(), "Rendering safety map");
        view::safety_map(&facilities, self.map_layout())
    }

    #[instrument(skip(self))]
    pub async fn update_weather_panel(&self, trigger: Trigger) -> WeatherPanel {
        let weather = self.providers.weather.fetch().await;
        let forecast = self.providers.forecast.fetch().await;
        let quakes = self.providers.earthquakes.fetch().await;

        info!(
            forecast_days = forecast.len(),
            earthquakes = quakes.len(),
            "Rendering weather panel"
        );
        WeatherPanel {
            map: view::weather_map(&weather, self.map_layout()),
            forecast: forecast_chart(&forecast, &self.map),
            earthquake_alerts: earthquake_alerts(&quakes),
        }
    }

    /// Run the handler belonging to `tab`
    pub async fn render(&self, tab: Tab, trigger: Trigger, controls: &ControlSnapshot) -> TabRender {
        match tab {
            Tab::Attractions => TabRender::Map(
                self.update_attractions_map(trigger, &controls.itinerary)
                    .await,
            ),
            Tab::Transport => TabRender::Map(
                self.update_transport_map(trigger, &controls.transport)
                    .await,
            ),
            Tab::Safety => TabRender::Map(self.update_safety_map(trigger, &controls.safety).await),
            Tab::Weather => TabRender::Weather(self.update_weather_panel(trigger).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::filter::Selection;
    use crate::providers::Endpoint;
    use crate::providers::testing::StubUpstream;
    use crate::view::MarkerColor;

    fn offline_dashboard() -> Dashboard {
        Dashboard::new(
            Providers::new(Arc::new(StubUpstream::unreachable())),
            MapConfig::default(),
        )
    }

    const CLICK: Trigger = Trigger::Click { n_clicks: 1 };
    const TICK: Trigger = Trigger::Tick { n_intervals: 4 };

    #[tokio::test]
    async fn test_attractions_search_and_category() {
        let dashboard = offline_dashboard();

        let controls = ItineraryControls {
            category: Selection::Only("Historical".to_string()),
            ..ItineraryControls::default()
        };
        let figure = dashboard.update_attractions_map(CLICK, &controls).await;
        assert_eq!(figure.point_count(), 1);
        assert!(figure.data[0].text[0].starts_with("Senso-ji Temple<br>"));

        let controls = ItineraryControls {
            search: Some("tokyo".to_string()),
            ..ItineraryControls::default()
        };
        let figure = dashboard.update_attractions_map(CLICK, &controls).await;
        assert_eq!(figure.point_count(), 1);
        assert!(figure.data[0].text[0].starts_with("Tokyo Tower<br>"));
    }

    #[tokio::test]
    async fn test_date_range_does_not_filter() {
        let dashboard = offline_dashboard();
        let controls = ItineraryControls {
            start_date: chrono::NaiveDate::from_ymd_opt(1999, 1, 1),
            end_date: chrono::NaiveDate::from_ymd_opt(1999, 1, 2),
            ..ItineraryControls::default()
        };
        let figure = dashboard.update_attractions_map(TICK, &controls).await;
        assert_eq!(figure.point_count(), 2);
    }

    #[tokio::test]
    async fn test_transport_type_filter() {
        let dashboard = offline_dashboard();
        let controls = TransportControls {
            transport_type: Selection::Only("Bus".to_string()),
        };
        let figure = dashboard.update_transport_map(TICK, &controls).await;
        assert_eq!(figure.point_count(), 1);
        assert_eq!(figure.data[0].marker.color, MarkerColor::PerPoint(vec!["red".to_string()]));
    }

    #[tokio::test]
    async fn test_safety_all_shows_everything() {
        let dashboard = offline_dashboard();
        let figure = dashboard
            .update_safety_map(Trigger::ControlChanged, &SafetyControls::default())
            .await;
        assert_eq!(figure.point_count(), 2);
    }

    #[tokio::test]
    async fn test_weather_panel_from_fallbacks() {
        let panel = offline_dashboard().update_weather_panel(TICK).await;
        assert_eq!(panel.map.point_count(), 1);
        assert_eq!(panel.forecast.data.len(), 2);
        assert_eq!(panel.earthquake_alerts.len(), 1);
        assert!(panel.earthquake_alerts[0].contains("5.2"));
    }

    #[tokio::test]
    async fn test_live_and_fallback_domains_mix() {
        let upstream = StubUpstream::unreachable().ok(
            Endpoint::Earthquakes,
            r#"[{"magnitude": 3.9, "lat": 35.1, "lon": 139.9, "time": "2024-07-21 08:00"},
                {"magnitude": 4.6, "lat": 34.7, "lon": 135.5, "time": "2024-07-21 09:15"}]"#,
        );
        let dashboard = Dashboard::new(Providers::new(Arc::new(upstream)), MapConfig::default());

        let panel = dashboard.update_weather_panel(TICK).await;
        assert_eq!(panel.earthquake_alerts.len(), 2);
        assert_eq!(panel.forecast.data.len(), 2);
    }

    #[tokio::test]
    async fn test_render_dispatches_per_tab() {
        let dashboard = offline_dashboard();
        let controls = ControlSnapshot::default();

        let render = dashboard.render(Tab::Transport, TICK, &controls).await;
        assert_eq!(render.summary(), "2 map points");

        let render = dashboard.render(Tab::Weather, TICK, &controls).await;
        assert_eq!(render.summary(), "2 forecast days, 1 earthquake alerts");
    }
}
