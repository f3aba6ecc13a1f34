//! Notification dispatch — picks a message variant and hands it to the
//! transport. Fire-and-forget: the scheduler never awaits a delivery
//! confirmation beyond the messenger's own call.

use rand::SeedableRng;
use rand::rngs::StdRng;
use standup_core::error::Result;
use standup_core::traits::Messenger;
use std::sync::Arc;

use crate::messages::{MessageKind, MessageSets};

/// Sends standup notifications through a [`Messenger`].
pub struct Dispatcher {
    messenger: Arc<dyn Messenger>,
    messages: MessageSets,
    rng: StdRng,
}

impl Dispatcher {
    pub fn new(messenger: Arc<dyn Messenger>, messages: MessageSets) -> Self {
        Self::with_rng(messenger, messages, StdRng::from_entropy())
    }

    /// Inject the random source, for deterministic message selection.
    pub fn with_rng(messenger: Arc<dyn Messenger>, messages: MessageSets, rng: StdRng) -> Self {
        Self {
            messenger,
            messages,
            rng,
        }
    }

    /// Pick a random message for `kind` and deliver it to `room`.
    pub async fn fire(&mut self, room: &str, kind: MessageKind) -> Result<()> {
        let text = self.messages.pick(kind, &mut self.rng);
        tracing::info!(
            "📣 {:?} notification for {room} via {}",
            kind,
            self.messenger.name()
        );
        self.messenger.deliver(room, &text).await
    }
}
