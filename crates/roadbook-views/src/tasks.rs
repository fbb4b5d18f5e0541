//! Task derivations: urgent band, tab filtering, and count badges

use roadbook_model::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// The fixed tab keys of the task view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskTab {
    /// Everything
    All,
    /// High + urgent priority, any status
    Priority,
    /// Status: todo
    Todo,
    /// Status: in progress
    InProgress,
    /// Status: completed
    Completed,
}

impl TaskTab {
    /// All tab keys in display order
    pub const ALL_TABS: [Self; 5] = [
        Self::All,
        Self::Priority,
        Self::Todo,
        Self::InProgress,
        Self::Completed,
    ];
}

/// Count badges for the task filter tabs
///
/// Recomputed from the full set on every call - cheap, O(n), and always
/// consistent with the data behind it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    /// Everything
    pub all: usize,
    /// High + urgent priority
    pub priority: usize,
    /// Status: todo
    pub todo: usize,
    /// Status: in progress
    pub in_progress: usize,
    /// Status: completed
    pub completed: usize,
}

impl TaskCounts {
    /// The badge for one tab
    #[inline]
    #[must_use]
    pub fn for_tab(&self, tab: TaskTab) -> usize {
        match tab {
            TaskTab::All => self.all,
            TaskTab::Priority => self.priority,
            TaskTab::Todo => self.todo,
            TaskTab::InProgress => self.in_progress,
            TaskTab::Completed => self.completed,
        }
    }
}

/// Tasks in the urgent band: high/urgent priority, not completed
///
/// Input order is preserved (tasks arrive due-date sorted from the store).
#[must_use]
pub fn urgent_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|t| t.is_urgent()).collect()
}

/// Count badges across all tabs
#[must_use]
pub fn task_counts(tasks: &[Task]) -> TaskCounts {
    let mut counts = TaskCounts {
        all: tasks.len(),
        ..TaskCounts::default()
    };
    for task in tasks {
        if task.priority.is_priority_band() {
            counts.priority += 1;
        }
        match task.status {
            TaskStatus::Todo => counts.todo += 1,
            TaskStatus::InProgress => counts.in_progress += 1,
            TaskStatus::Completed => counts.completed += 1,
            TaskStatus::Cancelled => {}
        }
    }
    counts
}

/// The subset of tasks behind one tab, input order preserved
#[must_use]
pub fn filter_tasks(tasks: &[Task], tab: TaskTab) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| match tab {
            TaskTab::All => true,
            TaskTab::Priority => t.priority.is_priority_band(),
            TaskTab::Todo => t.status == TaskStatus::Todo,
            TaskTab::InProgress => t.status == TaskStatus::InProgress,
            TaskTab::Completed => t.status == TaskStatus::Completed,
        })
        .collect()
}
