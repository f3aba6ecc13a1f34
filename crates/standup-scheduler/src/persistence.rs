//! File-based persistence — the whole standup list as one JSON file.
//! Human-readable and git-friendly; rewritten in full on every change.

use standup_core::error::Result;
use std::path::{Path, PathBuf};

use crate::standups::Standup;

const FILE_NAME: &str = "standups.json";

/// Whole-collection JSON persistence for the standup list.
pub struct StandupFile {
    path: PathBuf,
}

impl StandupFile {
    /// Create a store file handle under the given directory.
    pub fn new(dir: &Path) -> Self {
        std::fs::create_dir_all(dir).ok();
        Self {
            path: dir.join(FILE_NAME),
        }
    }

    /// Load the standup list. A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<Standup>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save the full standup list. Writes a sibling temp file and
    /// renames it into place so readers never observe a partial write.
    pub fn save(&self, standups: &[Standup]) -> Result<()> {
        let json = serde_json::to_string_pretty(standups)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, &self.path)?;
        tracing::debug!(
            "💾 Saved {} standups to {}",
            standups.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standup(room: &str, time: &str) -> Standup {
        Standup::new(room, time.parse().unwrap())
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = StandupFile::new(dir.path());
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = StandupFile::new(dir.path());

        let standups = vec![standup("room1", "09:30"), standup("room2", "17:00")];
        file.save(&standups).unwrap();
        assert_eq!(file.load().unwrap(), standups);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = StandupFile::new(dir.path());
        file.save(&[standup("room1", "09:30")]).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("standups.json")]);
    }

    #[test]
    fn test_load_corrupt_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let file = StandupFile::new(dir.path());
        std::fs::write(dir.path().join("standups.json"), "not json").unwrap();
        assert!(file.load().is_err());
    }
}
