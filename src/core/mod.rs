pub mod formatter;
pub mod reminder;
pub mod selector;
pub mod task_table;

pub use crate::domain::model::{RawRow, RunReport, SheetGrid, Task};
pub use crate::domain::ports::{Notifier, TaskSource};
pub use crate::utils::error::Result;
