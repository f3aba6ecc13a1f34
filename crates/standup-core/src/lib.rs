//! # standup-core
//!
//! Shared foundation for the standup reminder daemon: configuration,
//! the error taxonomy, and the `Messenger` delivery trait that the
//! scheduler hands finished messages to.

pub mod config;
pub mod error;
pub mod traits;

pub use config::StandupConfig;
pub use error::{Result, StandupError};
pub use traits::Messenger;
