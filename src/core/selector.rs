use crate::config::toml_config::Thresholds;
use crate::domain::model::Task;
use chrono::NaiveDate;

pub struct ReminderSelector {
    thresholds: Thresholds,
}

impl ReminderSelector {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn threshold_for(&self, task: &Task) -> i64 {
        if task.is_important {
            self.thresholds.important_days
        } else {
            self.thresholds.normal_days
        }
    }

    /// 期日在門檻天數內（含逾期）的任務才需要提醒。逾期不設下限，會一直提醒到標記完成
    pub fn needs_notify(&self, task: &Task, today: NaiveDate) -> bool {
        let days_left = (task.due_date - today).num_days();
        days_left <= self.threshold_for(task)
    }

    /// 篩選後依期日排序，同一天的任務保持原本順序
    pub fn select(&self, tasks: Vec<Task>, today: NaiveDate) -> Vec<Task> {
        let mut selected: Vec<Task> = tasks
            .into_iter()
            .filter(|task| self.needs_notify(task, today))
            .collect();
        selected.sort_by_key(|task| task.due_date);
        selected
    }
}

impl Default for ReminderSelector {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}
