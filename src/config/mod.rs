#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{required_env, validate_non_empty_string, validate_path, Validate};
use std::path::PathBuf;
use toml_config::Settings;

pub const ENV_BOT_TOKEN: &str = "BOT_USER_OAUTH_TOKEN";
pub const ENV_CREDENTIALS_PATH: &str = "GOOGLE_CREDENTIALS_PATH";
pub const ENV_SPREADSHEET_ID: &str = "REMINDER_SPREADSHEET_ID";
pub const ENV_MENTION_USER_ID: &str = "MENTION_USER_ID";
pub const ENV_SETTINGS_PATH: &str = "REMINDER_CONFIG";
pub const ENV_SLACK_CHANNEL: &str = "SLACK_CHANNEL";

/// 一次執行所需的全部設定，由進入點建立後注入各元件
#[derive(Clone)]
pub struct ReminderConfig {
    pub bot_token: String,
    pub credentials_path: PathBuf,
    pub spreadsheet_id: String,
    pub mention_user_id: String,
    pub settings: Settings,
}

impl std::fmt::Debug for ReminderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReminderConfig")
            .field("bot_token", &"***")
            .field("credentials_path", &self.credentials_path)
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("mention_user_id", &self.mention_user_id)
            .field("settings", &self.settings)
            .finish()
    }
}

impl ReminderConfig {
    /// 從環境變數建立設定（Lambda 與排程執行使用）
    pub fn from_env() -> Result<Self> {
        let settings = load_settings(std::env::var(ENV_SETTINGS_PATH).ok().as_deref())?;
        let mut config = Self {
            bot_token: required_env(ENV_BOT_TOKEN)?,
            credentials_path: PathBuf::from(required_env(ENV_CREDENTIALS_PATH)?),
            spreadsheet_id: required_env(ENV_SPREADSHEET_ID)?,
            mention_user_id: required_env(ENV_MENTION_USER_ID)?,
            settings,
        };

        if let Ok(channel) = std::env::var(ENV_SLACK_CHANNEL) {
            if !channel.trim().is_empty() {
                config.settings.slack.channel = channel;
            }
        }

        Ok(config)
    }

    pub fn channel(&self) -> &str {
        &self.settings.slack.channel
    }
}

/// 有指定路徑就讀檔，否則使用預設設定
pub fn load_settings(path: Option<&str>) -> Result<Settings> {
    match path {
        Some(path) if !path.trim().is_empty() => {
            tracing::debug!("Loading settings from {}", path);
            Settings::from_file(path)
        }
        _ => Ok(Settings::default()),
    }
}

impl Validate for ReminderConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string(ENV_BOT_TOKEN, &self.bot_token)?;
        validate_path(
            ENV_CREDENTIALS_PATH,
            &self.credentials_path.to_string_lossy(),
        )?;
        validate_non_empty_string(ENV_SPREADSHEET_ID, &self.spreadsheet_id)?;
        validate_non_empty_string(ENV_MENTION_USER_ID, &self.mention_user_id)?;
        self.settings.validate()?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}
