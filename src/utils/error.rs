use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Settings file error: {0}")]
    SettingsParseError(#[from] toml::de::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Credential file {path} is invalid: {message}")]
    CredentialFileError { path: String, message: String },

    #[error("Failed to sign token assertion: {0}")]
    AssertionError(#[from] jsonwebtoken::errors::Error),

    #[error("Token request to {endpoint} failed: {source}")]
    TokenRequestError {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Token exchange rejected ({status}): {body}")]
    TokenRejectedError { status: u16, body: String },

    #[error("Spreadsheet request failed: {0}")]
    SheetsRequestError(#[source] reqwest::Error),

    #[error("Spreadsheet API returned {status}: {body}")]
    SheetsApiError { status: u16, body: String },

    #[error("Column '{column}' not found in header row")]
    MissingColumnError { column: String },

    #[error("Malformed row {row}: {reason}")]
    MalformedRowError { row: usize, reason: String },

    #[error("Invalid due date '{value}' in row {row} (expected YYYY/MM/DD)")]
    InvalidDueDateError { row: usize, value: String },

    #[error("Slack request failed: {0}")]
    SlackRequestError(#[source] reqwest::Error),

    #[error("Slack API rejected message ({status}): {error}")]
    SlackApiError { status: u16, error: String },
}

pub type Result<T> = std::result::Result<T, ReminderError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Authentication,
    Data,
    Delivery,
}

impl ReminderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReminderError::IoError(_)
            | ReminderError::SettingsParseError(_)
            | ReminderError::MissingConfigError { .. }
            | ReminderError::InvalidConfigValueError { .. }
            | ReminderError::CredentialFileError { .. } => ErrorCategory::Configuration,

            ReminderError::AssertionError(_)
            | ReminderError::TokenRequestError { .. }
            | ReminderError::TokenRejectedError { .. } => ErrorCategory::Authentication,

            ReminderError::SheetsRequestError(_)
            | ReminderError::SheetsApiError { .. }
            | ReminderError::MissingColumnError { .. }
            | ReminderError::MalformedRowError { .. }
            | ReminderError::InvalidDueDateError { .. } => ErrorCategory::Data,

            ReminderError::SlackRequestError(_) | ReminderError::SlackApiError { .. } => {
                ErrorCategory::Delivery
            }
        }
    }

    /// CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Data => 1,
            ErrorCategory::Authentication | ErrorCategory::Delivery => 2,
            ErrorCategory::Configuration => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("設定有誤: {}", self),
            ErrorCategory::Authentication => format!("Google 認證失敗: {}", self),
            ErrorCategory::Data => format!("試算表資料無法處理: {}", self),
            ErrorCategory::Delivery => format!("Slack 訊息發送失敗: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReminderError::MissingConfigError { .. } => {
                "Set the missing environment variable or pass the matching CLI flag"
            }
            ReminderError::CredentialFileError { .. } | ReminderError::IoError(_) => {
                "Check GOOGLE_CREDENTIALS_PATH points to a readable service account JSON key"
            }
            ReminderError::SettingsParseError(_) => "Fix the TOML syntax in the settings file",
            ReminderError::TokenRejectedError { .. } | ReminderError::AssertionError(_) => {
                "Make sure the service account key is still active and not revoked"
            }
            ReminderError::SheetsApiError { status: 403, .. }
            | ReminderError::SheetsApiError { status: 404, .. } => {
                "Share the spreadsheet with the service account email and verify the spreadsheet id"
            }
            ReminderError::MissingColumnError { .. } => {
                "Rename the header cell or adjust [columns] in the settings file"
            }
            ReminderError::InvalidDueDateError { .. } => "Write due dates as YYYY/MM/DD",
            ReminderError::MalformedRowError { .. } => {
                "Remove values placed outside the header columns"
            }
            ReminderError::SlackApiError { .. } => {
                "Check the bot token scopes and that the bot has joined the channel"
            }
            ReminderError::TokenRequestError { .. }
            | ReminderError::SheetsRequestError(_)
            | ReminderError::SlackRequestError(_) => "Check network connectivity and run again",
            _ => "Review the configuration and run again",
        }
    }
}
