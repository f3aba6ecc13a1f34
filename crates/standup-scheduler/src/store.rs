//! The standup store — single source of truth for registered standups.
//! Pure data access: membership and filtering by room or (room, time),
//! no time logic. Every mutation is persisted before it returns.

use standup_core::error::Result;
use std::path::Path;

use crate::persistence::StandupFile;
use crate::standups::{Standup, StandupTime};

/// In-memory standup list backed by [`StandupFile`]. Ordering is
/// insertion order but nothing depends on it.
pub struct StandupStore {
    standups: Vec<Standup>,
    file: StandupFile,
}

impl StandupStore {
    /// Open the store under the given directory, loading any persisted
    /// standups.
    pub fn open(dir: &Path) -> Result<Self> {
        let file = StandupFile::new(dir);
        let standups = file.load()?;
        Ok(Self { standups, file })
    }

    /// Re-read the persisted list, so edits made by another process
    /// become visible. On a read failure the current snapshot is kept;
    /// the store never degrades to an empty list mid-flight.
    pub fn reload(&mut self) {
        match self.file.load() {
            Ok(standups) => self.standups = standups,
            Err(e) => tracing::warn!("⚠️ Failed to reload standups, keeping snapshot: {e}"),
        }
    }

    /// Every registered standup, all rooms.
    pub fn list_all(&self) -> Vec<Standup> {
        self.standups.clone()
    }

    /// Standups registered for one room.
    pub fn list_for(&self, room: &str) -> Vec<Standup> {
        self.standups
            .iter()
            .filter(|s| s.room == room)
            .cloned()
            .collect()
    }

    /// Append a standup. Duplicates of an existing (room, time) are
    /// allowed; `remove_one` removes them together.
    pub fn add(&mut self, standup: Standup) -> Result<()> {
        self.standups.push(standup);
        self.file.save(&self.standups)
    }

    /// Remove every standup for a room. Returns how many were removed.
    pub fn remove_all_for(&mut self, room: &str) -> Result<usize> {
        self.remove_where(|s| s.room == room)
    }

    /// Remove every standup matching (room, time) exactly. Returns how
    /// many were removed — more than one when duplicates exist.
    pub fn remove_one(&mut self, room: &str, time: StandupTime) -> Result<usize> {
        self.remove_where(|s| s.room == room && s.time == time)
    }

    fn remove_where(&mut self, matches: impl Fn(&Standup) -> bool) -> Result<usize> {
        let before = self.standups.len();
        self.standups.retain(|s| !matches(s));
        let removed = before - self.standups.len();
        if removed > 0 {
            self.file.save(&self.standups)?;
        }
        Ok(removed)
    }
}
