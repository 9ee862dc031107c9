use crate::domain::model::SheetGrid;
use crate::domain::ports::TaskSource;
use crate::utils::error::{ReminderError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
    #[serde(default)]
    index: usize,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    // 工作表完全空白時 API 不會回傳 values
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Google Sheets API v4 的讀取端
pub struct SheetsClient {
    client: Client,
    api_base: String,
    spreadsheet_id: String,
    access_token: String,
}

impl SheetsClient {
    pub fn new(api_base: &str, spreadsheet_id: &str, access_token: &str) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
            access_token: access_token.to_string(),
        }
    }

    fn spreadsheet_url(&self, extra: &[&str]) -> Result<Url> {
        let mut url =
            Url::parse(&self.api_base).map_err(|e| ReminderError::InvalidConfigValueError {
                field: "sheet.api_base".to_string(),
                value: self.api_base.clone(),
                reason: e.to_string(),
            })?;

        url.path_segments_mut()
            .map_err(|_| ReminderError::InvalidConfigValueError {
                field: "sheet.api_base".to_string(),
                value: self.api_base.clone(),
                reason: "URL cannot be a base".to_string(),
            })?
            .push("spreadsheets")
            .push(&self.spreadsheet_id)
            .extend(extra);

        Ok(url)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(ReminderError::SheetsRequestError)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Sheets API request failed");
            return Err(ReminderError::SheetsApiError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(ReminderError::SheetsRequestError)
    }

    /// 索引最小的工作表標題（即 UI 上的第一個分頁）
    pub async fn first_sheet_title(&self) -> Result<String> {
        let mut url = self.spreadsheet_url(&[])?;
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties(title,index)");

        let meta: SpreadsheetMeta = self.get_json(url).await?;
        meta.sheets
            .into_iter()
            .map(|s| s.properties)
            .min_by_key(|p| p.index)
            .map(|p| p.title)
            .ok_or_else(|| ReminderError::SheetsApiError {
                status: 200,
                body: format!("spreadsheet {} has no sheets", self.spreadsheet_id),
            })
    }

    pub async fn get_all_values(&self, sheet_title: &str) -> Result<SheetGrid> {
        // A1 表示法中工作表名稱需以單引號包住，內含的單引號要重複
        let range = format!("'{}'", sheet_title.replace('\'', "''"));
        let url = self.spreadsheet_url(&["values", &range])?;

        let values: ValueRange = self.get_json(url).await?;
        Ok(values.values)
    }
}

#[async_trait]
impl TaskSource for SheetsClient {
    async fn fetch_rows(&self) -> Result<SheetGrid> {
        let title = self.first_sheet_title().await?;
        tracing::debug!("Reading sheet '{}'", title);
        let grid = self.get_all_values(&title).await?;
        tracing::info!("Fetched {} rows from sheet '{}'", grid.len(), title);
        Ok(grid)
    }
}
