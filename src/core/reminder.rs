use crate::config::toml_config::Settings;
use crate::core::formatter::MessageFormatter;
use crate::core::selector::ReminderSelector;
use crate::core::task_table::TaskTable;
use crate::domain::model::{RunReport, Task};
use crate::domain::ports::{Notifier, TaskSource};
use crate::utils::error::Result;
use chrono::NaiveDate;

/// 還沒送出的提醒內容
#[derive(Debug, Clone)]
pub struct PreparedReminder {
    pub undone_tasks: usize,
    pub selected: Vec<Task>,
    pub message: String,
}

pub struct ReminderEngine<S: TaskSource, N: Notifier> {
    source: S,
    notifier: N,
    settings: Settings,
    selector: ReminderSelector,
    formatter: MessageFormatter,
}

impl<S: TaskSource, N: Notifier> ReminderEngine<S, N> {
    pub fn new(source: S, notifier: N, settings: Settings, mention_user_id: &str) -> Self {
        Self {
            source,
            notifier,
            selector: ReminderSelector::new(settings.thresholds),
            formatter: MessageFormatter::new(mention_user_id),
            settings,
        }
    }

    pub async fn prepare(&self, today: NaiveDate) -> Result<PreparedReminder> {
        // Extract
        tracing::info!("📥 Fetching task rows...");
        let grid = self.source.fetch_rows().await?;
        let undone = TaskTable::new(&self.settings.columns).undone_tasks(&grid)?;
        tracing::info!("Found {} undone tasks", undone.len());

        // Select
        let undone_tasks = undone.len();
        let selected = self.selector.select(undone, today);
        tracing::info!("{} tasks due for reminder as of {}", selected.len(), today);
        for task in &selected {
            tracing::debug!(
                due_date = %task.due_date,
                important = task.is_important,
                "{}",
                MessageFormatter::task_line(task)
            );
        }

        let message = self.formatter.format(&selected);
        Ok(PreparedReminder {
            undone_tasks,
            selected,
            message,
        })
    }

    pub async fn run(&self, today: NaiveDate) -> Result<RunReport> {
        let prepared = self.prepare(today).await?;

        // Load
        let channel = self.settings.slack.channel.as_str();
        tracing::info!("📤 Posting reminder to #{}", channel);
        self.notifier.post_message(channel, &prepared.message).await?;

        Ok(RunReport {
            channel: channel.to_string(),
            undone_tasks: prepared.undone_tasks,
            notified_tasks: prepared.selected.len(),
            message: prepared.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SheetGrid;
    use crate::utils::error::ReminderError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct FixedSource {
        grid: SheetGrid,
    }

    #[async_trait]
    impl TaskSource for FixedSource {
        async fn fetch_rows(&self) -> Result<SheetGrid> {
            Ok(self.grid.clone())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        sent: Arc<Mutex<Vec<(String, String)>>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn post_message(&self, channel: &str, text: &str) -> Result<()> {
            self.sent
                .lock()
                .unwrap()
                .push((channel.to_string(), text.to_string()));
            Ok(())
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn post_message(&self, _channel: &str, _text: &str) -> Result<()> {
            Err(ReminderError::SlackApiError {
                status: 200,
                error: "not_in_channel".to_string(),
            })
        }
    }

    fn sheet() -> SheetGrid {
        [
            vec!["達成", "分類", "やること", "期日", "重要度"],
            vec!["", "仕事", "企画書", "2024/05/08", "★"],
            vec!["", "家事", "買い物", "2024/05/05", ""],
            vec!["", "仕事", "経費精算", "2024/04/20", "★"],
            vec!["済", "仕事", "会議準備", "2024/05/02", ""],
        ]
        .into_iter()
        .map(|row| row.into_iter().map(String::from).collect())
        .collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[tokio::test]
    async fn test_run_posts_sorted_reminder() {
        let notifier = RecordingNotifier::default();
        let engine = ReminderEngine::new(
            FixedSource { grid: sheet() },
            notifier.clone(),
            Settings::default(),
            "U999",
        );

        let report = engine.run(today()).await.unwrap();
        assert_eq!(report.undone_tasks, 3);
        assert_eq!(report.notified_tasks, 2);
        assert_eq!(report.channel, "general");

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "general");
        assert_eq!(
            sent[0].1,
            "<@U999> 仕掛け人さま、おはようございます\n\
             本日のやることをお知らせしますね\n\n\
             [仕事]経費精算 (04/20まで)\n\
             [仕事]企画書 (05/08まで)\n"
        );
    }

    #[tokio::test]
    async fn test_all_clear_is_still_posted() {
        let notifier = RecordingNotifier::default();
        let grid = vec![vec![
            "達成".to_string(),
            "分類".to_string(),
            "やること".to_string(),
            "期日".to_string(),
            "重要度".to_string(),
        ]];
        let engine = ReminderEngine::new(
            FixedSource { grid },
            notifier.clone(),
            Settings::default(),
            "U999",
        );

        let report = engine.run(today()).await.unwrap();
        assert_eq!(report.notified_tasks, 0);
        assert!(report.message.ends_with("今日も一日、張り切ってまいりましょう"));
        assert_eq!(notifier.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_bad_row_prevents_posting() {
        let mut grid = sheet();
        grid.push(
            ["", "家事", "掃除", "5月10日", ""]
                .into_iter()
                .map(String::from)
                .collect(),
        );
        let notifier = RecordingNotifier::default();
        let engine = ReminderEngine::new(
            FixedSource { grid },
            notifier.clone(),
            Settings::default(),
            "U999",
        );

        let err = engine.run(today()).await.unwrap_err();
        assert!(matches!(err, ReminderError::InvalidDueDateError { row: 6, .. }));
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delivery_failure_propagates() {
        let engine = ReminderEngine::new(
            FixedSource { grid: sheet() },
            FailingNotifier,
            Settings::default(),
            "U999",
        );

        let err = engine.run(today()).await.unwrap_err();
        assert!(matches!(err, ReminderError::SlackApiError { .. }));
    }

    #[tokio::test]
    async fn test_prepare_has_no_side_effects() {
        let notifier = RecordingNotifier::default();
        let engine = ReminderEngine::new(
            FixedSource { grid: sheet() },
            notifier.clone(),
            Settings::default(),
            "U999",
        );

        let prepared = engine.prepare(today()).await.unwrap();
        assert_eq!(prepared.selected.len(), 2);
        assert!(notifier.sent.lock().unwrap().is_empty());
    }
}
