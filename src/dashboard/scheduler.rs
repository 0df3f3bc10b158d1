//! Polling timers as explicit scheduled callbacks
//!
//! Each callback runs on its own task and awaits its handler before taking the
//! next tick, so a slow render never overlaps with itself. Ticks missed while a
//! render is in flight are skipped.

use std::future::Future;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

type Callback = Box<dyn Fn(u64) -> BoxFuture<'static, ()> + Send + Sync>;

/// An interval plus the handler it drives. The handler receives the tick
/// count, starting at 0 for the immediate first tick.
pub struct ScheduledCallback {
    name: String,
    period: Duration,
    callback: Callback,
}

impl ScheduledCallback {
    pub fn new<F, Fut>(name: impl Into<String>, period: Duration, callback: F) -> Self
    where
        F: Fn(u64) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            name: name.into(),
            period,
            callback: Box::new(move |n| callback(n).boxed()),
        }
    }

    fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(self.period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut n_intervals: u64 = 0;
            loop {
                ticker.tick().await;
                debug!(callback = %self.name, n_intervals, "Tick");
                (self.callback)(n_intervals).await;
                n_intervals += 1;
            }
        })
    }
}

#[derive(Default)]
pub struct Scheduler {
    callbacks: Vec<ScheduledCallback>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, callback: ScheduledCallback) -> Self {
        self.callbacks.push(callback);
        self
    }

    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Start every callback on its own task
    pub fn start(self) -> RunningSchedule {
        let handles = self
            .callbacks
            .into_iter()
            .map(|callback| {
                info!(
                    callback = %callback.name,
                    period_secs = callback.period.as_secs_f64(),
                    "Starting polling timer"
                );
                callback.spawn()
            })
            .collect();
        RunningSchedule { handles }
    }
}

/// Handles of the running timers; dropping it leaves them running
pub struct RunningSchedule {
    handles: Vec<JoinHandle<()>>,
}

impl RunningSchedule {
    pub fn shutdown(self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}
