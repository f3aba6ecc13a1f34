//! Console delivery — prints notifications instead of sending them.
//! Used when no webhook is configured, and handy for dry runs.

use async_trait::async_trait;
use standup_core::error::Result;
use standup_core::traits::Messenger;

#[derive(Debug, Default)]
pub struct ConsoleMessenger;

#[async_trait]
impl Messenger for ConsoleMessenger {
    fn name(&self) -> &str {
        "console"
    }

    async fn deliver(&self, room: &str, text: &str) -> Result<()> {
        println!("[{room}] {text}");
        Ok(())
    }
}
