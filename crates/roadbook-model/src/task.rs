//! Task entity
//!
//! Production to-dos per tour. The urgent band (high + urgent priority,
//! not yet completed) drives the dashboard.

use crate::ids::{TaskId, TourId};
use crate::HasId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Whenever
    Low,
    /// Normal queue
    Medium,
    /// Needs attention soon
    High,
    /// Fire
    Urgent,
}

impl TaskPriority {
    /// True for the priority band surfaced on the dashboard
    #[inline]
    #[must_use]
    pub fn is_priority_band(&self) -> bool {
        matches!(self, Self::High | Self::Urgent)
    }
}

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started
    Todo,
    /// Being worked
    InProgress,
    /// Done
    Completed,
    /// Dropped
    Cancelled,
}

impl TaskStatus {
    /// Store-facing label for this status
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A production task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Identity
    pub id: TaskId,
    /// Owning tour
    pub tour_id: TourId,
    /// Short title
    pub title: String,
    /// Longer description
    pub description: Option<String>,
    /// Due date (tasks arrive due-date sorted from the store)
    pub due_date: Option<NaiveDate>,
    /// Priority
    pub priority: TaskPriority,
    /// Workflow status
    pub status: TaskStatus,
}

impl Task {
    /// Create a task with required fields; optionals default empty
    #[must_use]
    pub fn new(id: TaskId, tour_id: TourId, title: impl Into<String>) -> Self {
        Self {
            id,
            tour_id,
            title: title.into(),
            description: None,
            due_date: None,
            priority: TaskPriority::Medium,
            status: TaskStatus::Todo,
        }
    }

    /// With priority
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// With workflow status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// With due date
    #[inline]
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// In the urgent band: high/urgent priority and not yet completed
    #[inline]
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.priority.is_priority_band() && self.status != TaskStatus::Completed
    }
}

impl HasId for Task {
    type Id = TaskId;

    fn id(&self) -> TaskId {
        self.id
    }
}
