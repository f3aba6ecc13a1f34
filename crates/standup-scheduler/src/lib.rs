//! # standup-scheduler
//!
//! Recurring weekday standup reminders: a room registers a time of day,
//! the scheduler warns the room a few minutes ahead and calls the
//! standup at the registered minute.
//!
//! ## Architecture
//! ```text
//! scheduler loop (wakes once per minute, Mon-Fri)
//!   └── StandupScheduler::tick(now)
//!         ├── StandupStore::reload + list_all      (single source of truth)
//!         ├── matcher::fires_main / fires_warning  (pure, per standup)
//!         └── Dispatcher::fire(room, kind)
//!               ├── MessageSets::pick(kind, rng)   (pure given the rng)
//!               └── Messenger::deliver(room, text) (external transport)
//! ```
//!
//! Matching works on wall-clock hour/minute equality in the host's
//! local time, so one evaluation per minute fires each occurrence
//! exactly once. There is no catch-up: a missed minute is lost.

pub mod dispatch;
pub mod engine;
pub mod matcher;
pub mod messages;
pub mod persistence;
pub mod standups;
pub mod store;

pub use dispatch::Dispatcher;
pub use engine::{StandupScheduler, run_scheduler};
pub use messages::{MessageKind, MessageSets};
pub use persistence::StandupFile;
pub use standups::{Standup, StandupTime};
pub use store::StandupStore;
