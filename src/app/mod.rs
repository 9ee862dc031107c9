// Application layer: wires the adapters to the reminder engine for one run.

use crate::adapters::{AssertionSession, ConsoleNotifier, SheetsClient, SlackNotifier};
use crate::config::ReminderConfig;
use crate::core::reminder::ReminderEngine;
use crate::domain::model::RunReport;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::NaiveDate;

/// 單次執行：取得 token、讀取試算表、篩選並發送提醒
pub async fn run_once(config: &ReminderConfig, today: NaiveDate, dry_run: bool) -> Result<RunReport> {
    config.validate()?;

    let session = AssertionSession::from_file(
        &config.credentials_path,
        config.settings.sheet.scopes.clone(),
    )?;
    tracing::info!("🔑 Exchanging service account credentials for {}", session.issuer());
    let token = session.fetch_token().await?;

    let source = SheetsClient::new(
        &config.settings.sheet.api_base,
        &config.spreadsheet_id,
        &token.access_token,
    );

    let report = if dry_run {
        ReminderEngine::new(
            source,
            ConsoleNotifier,
            config.settings.clone(),
            &config.mention_user_id,
        )
        .run(today)
        .await?
    } else {
        let notifier = SlackNotifier::new(&config.settings.slack.api_url, &config.bot_token);
        ReminderEngine::new(
            source,
            notifier,
            config.settings.clone(),
            &config.mention_user_id,
        )
        .run(today)
        .await?
    };

    tracing::info!(
        "✅ Reminder finished: {} of {} undone tasks notified to #{}",
        report.notified_tasks,
        report.undone_tasks,
        report.channel
    );
    Ok(report)
}
