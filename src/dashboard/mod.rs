//! The dashboard: layout, control snapshots, per-tab update handlers and the
//! polling schedule that drives them.

use std::sync::Arc;

use tracing::info;

pub mod controls;
pub mod handlers;
pub mod layout;
pub mod scheduler;

pub use controls::{
    ControlSnapshot, ItineraryControls, SafetyControls, TransportControls, Trigger, TriggerParams,
};
pub use handlers::{Dashboard, TabRender};
pub use layout::{DashboardLayout, Tab, compose};
pub use scheduler::{RunningSchedule, ScheduledCallback, Scheduler};

/// One polling timer per tab, at the interval the layout declares, rendering
/// with the given control values and logging the outcome.
pub fn polling_schedule(
    dashboard: Arc<Dashboard>,
    layout: &DashboardLayout,
    controls: ControlSnapshot,
) -> Scheduler {
    let controls = Arc::new(controls);
    layout.tabs.iter().fold(Scheduler::new(), |scheduler, tab| {
        let tab_id = tab.tab;
        let dashboard = Arc::clone(&dashboard);
        let controls = Arc::clone(&controls);
        scheduler.with(ScheduledCallback::new(
            tab.polling.id.clone(),
            tab.polling.interval(),
            move |n_intervals| {
                let dashboard = Arc::clone(&dashboard);
                let controls = Arc::clone(&controls);
                async move {
                    let render = dashboard
                        .render(tab_id, Trigger::Tick { n_intervals }, &controls)
                        .await;
                    info!(tab = tab_id.id(), n_intervals, "{}", render.summary());
                }
            },
        ))
    })
}
