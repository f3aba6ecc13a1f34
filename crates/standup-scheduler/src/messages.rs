//! Message sets — the fixed pools the dispatcher samples from.
//! Swapping these never touches scheduling logic.

use rand::Rng;
use rand::seq::SliceRandom;
use standup_core::config::MessageConfig;

/// Which notification is being sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Fired exactly at the standup's registered minute.
    Main,
    /// Fired the warning offset ahead of the registered minute.
    Warning,
}

/// Built-in main announcements.
pub const DEFAULT_MAIN: &[&str] = &[
    "@channel Standup time!",
    "@channel Time for standup, y'all.",
    "@channel It's standup time once again!",
    "@channel Get up, stand up (it's time for our standup)",
    "@channel Standup time. Get up, humans",
    "@channel Another day, another standup",
];

/// Built-in warnings.
pub const DEFAULT_WARNINGS: &[&str] = &[
    "@channel Get the kettle on, Standup in 10",
    "@channel This is your 10 minute standup warning",
    "@channel You've got a standup in 10 minutes",
    "@channel Time to put your day in order: Standup in 10 minutes",
    "@channel Grab a brew, standup soon",
];

/// One pool of messages per [`MessageKind`], plus an optional link
/// appended to main announcements.
#[derive(Debug, Clone)]
pub struct MessageSets {
    main: Vec<String>,
    warning: Vec<String>,
    link: Option<String>,
}

impl MessageSets {
    /// Build from config; an empty list falls back to the built-ins.
    pub fn from_config(config: &MessageConfig) -> Self {
        let or_default = |list: &[String], defaults: &[&str]| {
            if list.is_empty() {
                defaults.iter().map(|s| (*s).to_string()).collect()
            } else {
                list.to_vec()
            }
        };
        Self {
            main: or_default(&config.main, DEFAULT_MAIN),
            warning: or_default(&config.warning, DEFAULT_WARNINGS),
            link: config.link.clone(),
        }
    }

    /// Pick one message uniformly at random. Pure given the rng, so a
    /// seeded rng makes selection deterministic in tests.
    pub fn pick<R: Rng>(&self, kind: MessageKind, rng: &mut R) -> String {
        let (pool, link) = match kind {
            MessageKind::Main => (&self.main, self.link.as_deref()),
            MessageKind::Warning => (&self.warning, None),
        };
        // Pools built through `from_config` are never empty.
        let base = pool
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| "Standup time!".to_string());
        match link {
            Some(link) => format!("{base} {link}"),
            None => base,
        }
    }

    /// Does `text` belong to the pool for `kind`? Lets scenario tests
    /// tell a warning apart from a main announcement.
    pub fn contains(&self, kind: MessageKind, text: &str) -> bool {
        let (pool, link) = match kind {
            MessageKind::Main => (&self.main, self.link.as_deref()),
            MessageKind::Warning => (&self.warning, None),
        };
        pool.iter().any(|m| match link {
            Some(link) => text == format!("{m} {link}"),
            None => text == *m,
        })
    }
}

impl Default for MessageSets {
    fn default() -> Self {
        Self::from_config(&MessageConfig::default())
    }
}
