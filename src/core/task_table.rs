use crate::config::toml_config::ColumnNames;
use crate::domain::model::{RawRow, SheetGrid, Task};
use crate::utils::error::{ReminderError, Result};
use chrono::NaiveDate;

pub const DUE_DATE_FORMAT: &str = "%Y/%m/%d";

/// 解析 `YYYY/MM/DD` 格式的期日；`row` 為試算表上的列號，只用於錯誤訊息
/// 前後多餘的空白也視為格式錯誤
pub fn parse_due_date(row: usize, value: &str) -> Result<NaiveDate> {
    let invalid = || ReminderError::InvalidDueDateError {
        row,
        value: value.to_string(),
    };

    if value.trim() != value {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DUE_DATE_FORMAT).map_err(|_| invalid())
}

/// 把格線轉成以標題為鍵的列。回傳值的每個元素附帶試算表列號（標題為第 1 列）
pub fn rows_from_grid(grid: &SheetGrid) -> Result<Vec<(usize, RawRow)>> {
    let Some((header, data)) = grid.split_first() else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::with_capacity(data.len());
    for (offset, cells) in data.iter().enumerate() {
        let row_number = offset + 2;

        if cells.len() > header.len() && cells[header.len()..].iter().any(|c| !c.is_empty()) {
            return Err(ReminderError::MalformedRowError {
                row: row_number,
                reason: format!(
                    "{} cells but only {} header columns",
                    cells.len(),
                    header.len()
                ),
            });
        }

        // API 會省略列尾的空白儲存格，這裡補回空字串
        let row: RawRow = header
            .iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), cells.get(i).cloned().unwrap_or_default()))
            .collect();

        rows.push((row_number, row));
    }

    Ok(rows)
}

pub struct TaskTable<'a> {
    columns: &'a ColumnNames,
}

impl<'a> TaskTable<'a> {
    pub fn new(columns: &'a ColumnNames) -> Self {
        Self { columns }
    }

    pub fn check_header(&self, header: &[String]) -> Result<()> {
        for column in self.columns.all() {
            if !header.iter().any(|h| h == column) {
                return Err(ReminderError::MissingColumnError {
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    /// 取出尚未完成的任務。「達成」欄非空白即視為完成
    pub fn undone_tasks(&self, grid: &SheetGrid) -> Result<Vec<Task>> {
        let Some(header) = grid.first() else {
            tracing::warn!("Spreadsheet is empty, no header row found");
            return Ok(Vec::new());
        };
        self.check_header(header)?;

        let mut tasks = Vec::new();
        for (row_number, row) in rows_from_grid(grid)? {
            if !self.cell(&row, &self.columns.done).is_empty() {
                continue;
            }
            tasks.push(self.task_from_row(row_number, &row)?);
        }

        tracing::debug!("Parsed {} undone tasks from {} rows", tasks.len(), grid.len() - 1);
        Ok(tasks)
    }

    pub fn task_from_row(&self, row_number: usize, row: &RawRow) -> Result<Task> {
        let due_date = parse_due_date(row_number, self.cell(row, &self.columns.due_date))?;

        Ok(Task {
            category: self.cell(row, &self.columns.category).to_string(),
            description: self.cell(row, &self.columns.description).to_string(),
            due_date,
            is_important: !self.cell(row, &self.columns.importance).is_empty(),
        })
    }

    fn cell<'r>(&self, row: &'r RawRow, column: &str) -> &'r str {
        row.get(column).map(String::as_str).unwrap_or("")
    }
}
