//! The scheduler engine — owns the store and dispatcher, exposes the
//! create/delete/list operations the command layer calls, and
//! evaluates one tick per minute on weekdays.

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use standup_core::error::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::dispatch::Dispatcher;
use crate::matcher;
use crate::messages::MessageKind;
use crate::standups::{Standup, StandupTime};
use crate::store::StandupStore;

/// The standup scheduler: registration API plus the per-minute tick.
pub struct StandupScheduler {
    store: StandupStore,
    dispatcher: Dispatcher,
    warning_offset: Duration,
}

impl StandupScheduler {
    pub fn new(store: StandupStore, dispatcher: Dispatcher, warning_minutes: u32) -> Self {
        Self {
            store,
            dispatcher,
            warning_offset: Duration::minutes(i64::from(warning_minutes)),
        }
    }

    /// Register a standup for `room` at `time` (hh:mm). Malformed
    /// input is rejected before anything is persisted.
    pub fn create(&mut self, room: &str, time: &str) -> Result<Standup> {
        let time: StandupTime = time.parse()?;
        let standup = Standup::new(room, time);
        self.store.add(standup.clone())?;
        tracing::info!("📅 Standup registered for {room} at {time}");
        Ok(standup)
    }

    /// Delete the standup(s) for `room` at exactly `time`. Returns how
    /// many were removed — duplicates go together.
    pub fn delete_one(&mut self, room: &str, time: &str) -> Result<usize> {
        let time: StandupTime = time.parse()?;
        self.store.remove_one(room, time)
    }

    /// Delete every standup for `room`. Returns how many were removed.
    pub fn delete_all(&mut self, room: &str) -> Result<usize> {
        self.store.remove_all_for(room)
    }

    /// Standups registered for one room.
    pub fn list(&self, room: &str) -> Vec<Standup> {
        self.store.list_for(room)
    }

    /// Every standup in every room.
    pub fn list_all(&self) -> Vec<Standup> {
        self.store.list_all()
    }

    /// Evaluate one minute. Re-reads the store, checks every standup
    /// against `now` for both the main and the warning window, and
    /// dispatches each hit. Weekend ticks are no-ops. Returns how many
    /// notifications were dispatched (delivery failures included —
    /// they are logged and isolated, never retried within the tick).
    pub async fn tick(&mut self, now: NaiveDateTime) -> usize {
        if !matcher::is_weekday(now) {
            return 0;
        }
        self.store.reload();

        let mut fired = 0;
        for standup in self.store.list_all() {
            if matcher::fires_main(now, standup.time) {
                self.dispatch(&standup.room, MessageKind::Main).await;
                fired += 1;
            }
            if matcher::fires_warning(now, standup.time, self.warning_offset) {
                self.dispatch(&standup.room, MessageKind::Warning).await;
                fired += 1;
            }
        }
        fired
    }

    /// One failing room must not abort the rest of the batch.
    async fn dispatch(&mut self, room: &str, kind: MessageKind) {
        if let Err(e) = self.dispatcher.fire(room, kind).await {
            tracing::warn!("⚠️ Delivery to {room} failed: {e}");
        }
    }
}

/// Drive the scheduler for the life of the process: wake just after
/// every minute boundary and evaluate that minute against the host's
/// local clock. No tick is ever fatal; a paused process simply loses
/// the minutes it slept through (no catch-up).
pub async fn run_scheduler(scheduler: Arc<Mutex<StandupScheduler>>) {
    tracing::info!("⏰ Standup scheduler started (checks once per minute, Mon-Fri)");
    loop {
        tokio::time::sleep(until_next_minute()).await;
        let now = Local::now().naive_local();
        let fired = scheduler.lock().await.tick(now).await;
        if fired > 0 {
            tracing::info!("🔔 Dispatched {fired} notification(s) at {}", now.format("%H:%M"));
        }
    }
}

/// Time until one second past the next minute boundary, so each wakeup
/// lands squarely inside a fresh minute.
fn until_next_minute() -> std::time::Duration {
    let second = Local::now().second().min(59) as u64;
    std::time::Duration::from_secs(61 - second)
}
