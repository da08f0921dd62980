//! Table rendering for task lists.
//!
//! Formatting is a pure function over a slice of tasks; the trait's `show`
//! only prints the result. No error conditions.

use crate::task::Task;

/// Width of the description column. Longer descriptions are cut to fit with
/// a `...` marker.
const DESCRIPTION_WIDTH: usize = 32;

/// Line printed instead of a table when there are no tasks.
pub const EMPTY_MESSAGE: &str = "No task in the list.. Yay!";

/// Render boundary between the service and whatever presents the list.
pub trait TaskDisplay {
    fn show(&self, tasks: &[Task]);
}

/// Bordered table on stdout: ID, Task, Status columns.
#[derive(Debug, Default)]
pub struct TableDisplay;

impl TaskDisplay for TableDisplay {
    fn show(&self, tasks: &[Task]) {
        print!("{}", format_table(tasks));
    }
}

/// Format the task table (or the empty-list line) as a string ending in a
/// newline.
pub fn format_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let mut out = String::new();
    out.push_str("┌────┬──────────────────────────────────┬────────┐\n");
    out.push_str("│ ID │ Task                             │ Status │\n");
    out.push_str("├────┼──────────────────────────────────┼────────┤\n");
    for task in tasks {
        let status = if task.done { "✅" } else { "❌" };
        out.push_str(&format!(
            "│ {:>2} │ {:<width$} │ {}    │\n",
            task.id,
            truncate(&task.description, DESCRIPTION_WIDTH),
            status,
            width = DESCRIPTION_WIDTH,
        ));
    }
    out.push_str("└────┴──────────────────────────────────┴────────┘\n");
    out
}

/// Cut `text` to at most `max_len` characters, ending in `...` when cut.
fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}
