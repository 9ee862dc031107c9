use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// 試算表中的一列，以標題列的欄位名稱為鍵
pub type RawRow = HashMap<String, String>;

/// 試算表 values API 回傳的儲存格格線，第一列為標題
pub type SheetGrid = Vec<Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub category: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub is_important: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub channel: String,
    pub undone_tasks: usize,
    pub notified_tasks: usize,
    pub message: String,
}
