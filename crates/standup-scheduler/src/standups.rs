//! Standup definitions — the data model for scheduled reminders.

use serde::{Deserialize, Serialize};
use standup_core::error::{Result, StandupError};
use std::fmt;
use std::str::FromStr;

/// A registered standup: one room, one wall-clock time of day, fired
/// every weekday until deleted. `(room, time)` is the natural key;
/// duplicates are allowed and removed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standup {
    /// Opaque destination identifier owned by the transport.
    pub room: String,
    /// Validated time of day.
    pub time: StandupTime,
}

impl Standup {
    pub fn new(room: impl Into<String>, time: StandupTime) -> Self {
        Self {
            room: room.into(),
            time,
        }
    }
}

/// A validated wall-clock time of day. Construction is the only
/// validation point: a `StandupTime` in hand is always in range, so
/// nothing downstream re-checks it.
///
/// Serialized as the normalized `"HH:MM"` string to keep the persisted
/// JSON human-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StandupTime {
    hour: u8,
    minute: u8,
}

impl StandupTime {
    /// Build from raw hour/minute, rejecting out-of-range values.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(StandupError::InvalidTime(format!("{hour}:{minute:02}")));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }
}

impl FromStr for StandupTime {
    type Err = StandupError;

    /// Parse `hh:mm` with single- or double-digit fields. Anything
    /// else (missing colon, extra fields, non-digits, out-of-range
    /// values) is rejected.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StandupError::InvalidTime(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || h.len() > 2 || m.is_empty() || m.len() > 2 {
            return Err(invalid());
        }
        let hour: u32 = h.parse().map_err(|_| invalid())?;
        let minute: u32 = m.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for StandupTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for StandupTime {
    type Error = StandupError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<StandupTime> for String {
    fn from(time: StandupTime) -> Self {
        time.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_times() {
        for (input, hour, minute) in [
            ("09:30", 9, 30),
            ("9:30", 9, 30),
            ("9:5", 9, 5),
            ("00:00", 0, 0),
            ("23:59", 23, 59),
            (" 12:05 ", 12, 5),
        ] {
            let time: StandupTime = input.parse().unwrap();
            assert_eq!(time.hour(), hour, "input {input}");
            assert_eq!(time.minute(), minute, "input {input}");
        }
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in [
            "", "9", "930", "25:99", "24:00", "12:60", "12:345", "ab:cd", "12:3a", "-1:30",
            "12:-5", "09:30:00", ":30", "12:", "123:45",
        ] {
            let err = input.parse::<StandupTime>().unwrap_err();
            assert!(
                matches!(err, StandupError::InvalidTime(_)),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_normalizes() {
        let time: StandupTime = "9:05".parse().unwrap();
        assert_eq!(time.to_string(), "09:05");
    }

    #[test]
    fn test_new_range_check() {
        assert!(StandupTime::new(23, 59).is_ok());
        assert!(StandupTime::new(24, 0).is_err());
        assert!(StandupTime::new(0, 60).is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let standup = Standup::new("room1", "9:30".parse().unwrap());
        let json = serde_json::to_string(&standup).unwrap();
        assert_eq!(json, r#"{"room":"room1","time":"09:30"}"#);

        let parsed: Standup = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, standup);
    }

    #[test]
    fn test_deserialize_rejects_malformed_time() {
        let result = serde_json::from_str::<Standup>(r#"{"room":"room1","time":"25:99"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_equality_is_the_natural_key() {
        let a = Standup::new("room1", "09:30".parse().unwrap());
        let b = Standup::new("room1", "9:30".parse().unwrap());
        let c = Standup::new("room2", "09:30".parse().unwrap());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
