use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api/chat.postMessage";
pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";

/// 可選的 TOML 設定檔；每個欄位都有預設值，所以空檔案也是合法設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub slack: SlackSettings,
    pub sheet: SheetSettings,
    pub columns: ColumnNames,
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackSettings {
    pub channel: String,
    pub api_url: String,
}

impl Default for SlackSettings {
    fn default() -> Self {
        Self {
            channel: "general".to_string(),
            api_url: DEFAULT_SLACK_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSettings {
    pub api_base: String,
    pub scopes: Vec<String>,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_SHEETS_API_BASE.to_string(),
            scopes: vec![
                "https://spreadsheets.google.com/feeds".to_string(),
                "https://www.googleapis.com/auth/drive".to_string(),
            ],
        }
    }
}

/// 標題列中各欄位的名稱
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub done: String,
    pub category: String,
    pub description: String,
    pub due_date: String,
    pub importance: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            done: "達成".to_string(),
            category: "分類".to_string(),
            description: "やること".to_string(),
            due_date: "期日".to_string(),
            importance: "重要度".to_string(),
        }
    }
}

impl ColumnNames {
    pub fn all(&self) -> [&str; 5] {
        [
            self.done.as_str(),
            self.category.as_str(),
            self.description.as_str(),
            self.due_date.as_str(),
            self.importance.as_str(),
        ]
    }
}

/// 距離期日幾天內開始提醒（含當天）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub important_days: i64,
    pub normal_days: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            important_days: 7,
            normal_days: 3,
        }
    }
}

impl Settings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("slack.channel", &self.slack.channel)?;
        validate_url("slack.api_url", &self.slack.api_url)?;
        validate_url("sheet.api_base", &self.sheet.api_base)?;

        if self.sheet.scopes.is_empty() {
            return Err(crate::utils::error::ReminderError::InvalidConfigValueError {
                field: "sheet.scopes".to_string(),
                value: "[]".to_string(),
                reason: "At least one OAuth scope is required".to_string(),
            });
        }

        for column in self.columns.all() {
            validate_non_empty_string("columns", column)?;
        }

        validate_range("thresholds.important_days", self.thresholds.important_days, 0, 365)?;
        validate_range("thresholds.normal_days", self.thresholds.normal_days, 0, 365)?;

        Ok(())
    }
}
