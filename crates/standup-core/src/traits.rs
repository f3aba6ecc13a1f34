//! The delivery seam between the scheduler and the outside world.

use async_trait::async_trait;

use crate::error::Result;

/// Delivers a finished message to a room. The scheduler treats `room`
/// as an opaque key owned by the transport; it never inspects it.
///
/// Delivery is best-effort: the scheduler does not retry within a tick
/// and a failure for one room never blocks the rest of the batch.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Channel name, for logs.
    fn name(&self) -> &str;

    /// Send `text` to `room`.
    async fn deliver(&self, room: &str, text: &str) -> Result<()>;
}
