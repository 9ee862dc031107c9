use crate::domain::model::SheetGrid;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TaskSource: Send + Sync {
    /// 取回第一個工作表的所有列（含標題列）
    async fn fetch_rows(&self) -> Result<SheetGrid>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn post_message(&self, channel: &str, text: &str) -> Result<()>;
}
