use crate::domain::ports::Notifier;
use crate::utils::error::Result;
use async_trait::async_trait;

/// dry-run 用：把訊息印到標準輸出而不是送到 Slack
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn post_message(&self, channel: &str, text: &str) -> Result<()> {
        tracing::info!("🧪 Dry run, message for #{} not sent", channel);
        println!("{}", text);
        Ok(())
    }
}
