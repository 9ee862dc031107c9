use crate::domain::model::Task;

const GREETING: &str = "仕掛け人さま、おはようございます";
const ALL_CLEAR: &str = "今日も一日、張り切ってまいりましょう";
const TASKS_HEADER: &str = "本日のやることをお知らせしますね";

pub struct MessageFormatter {
    mention_user_id: String,
}

impl MessageFormatter {
    pub fn new(mention_user_id: impl Into<String>) -> Self {
        Self {
            mention_user_id: mention_user_id.into(),
        }
    }

    /// `[分類]やること (MM/DDまで)`
    pub fn task_line(task: &Task) -> String {
        format!(
            "[{}]{} ({}まで)",
            task.category,
            task.description,
            task.due_date.format("%m/%d")
        )
    }

    pub fn format(&self, tasks: &[Task]) -> String {
        let mut message = format!("<@{}> {}\n", self.mention_user_id, GREETING);

        if tasks.is_empty() {
            message.push_str(ALL_CLEAR);
            return message;
        }

        message.push_str(TASKS_HEADER);
        message.push_str("\n\n");
        for task in tasks {
            message.push_str(&Self::task_line(task));
            message.push('\n');
        }
        message
    }
}
