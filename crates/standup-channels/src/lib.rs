//! # standup-channels
//! Delivery channel implementations. Each one implements the
//! `Messenger` trait from `standup-core`; the scheduler neither knows
//! nor cares which transport is behind it.

pub mod console;
pub mod webhook;

pub use console::ConsoleMessenger;
pub use webhook::WebhookMessenger;
