use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};

use crate::dashboard::{
    Dashboard, DashboardLayout, ItineraryControls, SafetyControls, TransportControls, Trigger,
    TriggerParams,
};
use crate::view::{MapFigure, WeatherPanel};

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
    pub layout: Arc<DashboardLayout>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/layout", get(get_layout))
        .route("/tabs/attractions", get(get_attractions))
        .route("/tabs/transport", get(get_transport))
        .route("/tabs/safety", get(get_safety))
        .route("/tabs/weather", get(get_weather))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn get_layout(State(state): State<AppState>) -> Json<DashboardLayout> {
    Json(state.layout.as_ref().clone())
}

async fn get_attractions(
    State(state): State<AppState>,
    Query(trigger): Query<TriggerParams>,
    Query(controls): Query<ItineraryControls>,
) -> Json<MapFigure> {
    Json(
        state
            .dashboard
            .update_attractions_map(Trigger::from(trigger), &controls)
            .await,
    )
}

async fn get_transport(
    State(state): State<AppState>,
    Query(trigger): Query<TriggerParams>,
    Query(controls): Query<TransportControls>,
) -> Json<MapFigure> {
    Json(
        state
            .dashboard
            .update_transport_map(Trigger::from(trigger), &controls)
            .await,
    )
}

async fn get_safety(
    State(state): State<AppState>,
    Query(trigger): Query<TriggerParams>,
    Query(controls): Query<SafetyControls>,
) -> Json<MapFigure> {
    Json(
        state
            .dashboard
            .update_safety_map(Trigger::from(trigger), &controls)
            .await,
    )
}

async fn get_weather(
    State(state): State<AppState>,
    Query(trigger): Query<TriggerParams>,
) -> Json<WeatherPanel> {
    Json(
        state
            .dashboard
            .update_weather_panel(Trigger::from(trigger))
            .await,
    )
}
