use crate::config::{
    load_settings, ReminderConfig, ENV_BOT_TOKEN, ENV_CREDENTIALS_PATH, ENV_MENTION_USER_ID,
    ENV_SETTINGS_PATH, ENV_SLACK_CHANNEL, ENV_SPREADSHEET_ID,
};
use crate::utils::error::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sheet-reminder")]
#[command(about = "Post upcoming spreadsheet tasks to Slack")]
pub struct CliArgs {
    /// Slack bot OAuth token
    #[arg(long, env = ENV_BOT_TOKEN, hide_env_values = true)]
    pub bot_token: String,

    /// Path to the Google service account JSON key
    #[arg(long, env = ENV_CREDENTIALS_PATH)]
    pub credentials_path: PathBuf,

    /// Spreadsheet id (the part of the sheet URL after /d/)
    #[arg(long, env = ENV_SPREADSHEET_ID)]
    pub spreadsheet_id: String,

    /// Slack user id mentioned at the top of the message
    #[arg(long, env = ENV_MENTION_USER_ID)]
    pub mention_user_id: String,

    /// Optional TOML settings file
    #[arg(short, long, env = ENV_SETTINGS_PATH)]
    pub config: Option<String>,

    /// Override the Slack channel from the settings file
    #[arg(long, env = ENV_SLACK_CHANNEL)]
    pub channel: Option<String>,

    /// Evaluate due dates against this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Print the message instead of posting it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn into_config(self) -> Result<ReminderConfig> {
        let mut settings = load_settings(self.config.as_deref())?;
        if let Some(channel) = self.channel {
            settings.slack.channel = channel;
        }

        Ok(ReminderConfig {
            bot_token: self.bot_token,
            credentials_path: self.credentials_path,
            spreadsheet_id: self.spreadsheet_id,
            mention_user_id: self.mention_user_id,
            settings,
        })
    }
}
