//! Tasks controller: board with filter tabs and count badges

use crate::config::ViewConfig;
use crate::view_state::ViewState;
use roadbook_model::Task;
use roadbook_state::TabFilter;
use roadbook_store::{Query, RecordStore, SortField};
use roadbook_views::{filter_tasks, task_counts, TaskCounts, TaskTab};

/// The task board: every tour task, filtered by the active tab
///
/// The active tab survives a refresh; badges and the visible subset are
/// derived fresh from whatever the last fetch returned.
#[derive(Debug)]
pub struct TasksView {
    config: ViewConfig,
    state: ViewState<Vec<Task>>,
    filter: TabFilter<TaskTab>,
}

impl TasksView {
    /// A task board for one tour, initially loading with the All tab active
    #[inline]
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            state: ViewState::Loading,
            filter: TabFilter::new(TaskTab::All),
        }
    }

    /// Current view state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ViewState<Vec<Task>> {
        &self.state
    }

    /// The active tab
    #[inline]
    #[must_use]
    pub fn active_tab(&self) -> TaskTab {
        self.filter.active()
    }

    /// Switch tabs
    pub fn select_tab(&mut self, tab: TaskTab) {
        self.filter.select(tab);
    }

    /// Badge counts over the full set
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        self.state
            .ready()
            .map(|tasks| task_counts(tasks))
            .unwrap_or_default()
    }

    /// Tasks visible under the active tab
    #[must_use]
    pub fn visible(&self) -> Vec<&Task> {
        self.state
            .ready()
            .map(|tasks| filter_tasks(tasks, self.filter.active()))
            .unwrap_or_default()
    }

    /// Re-fetch tasks, due date ascending with undated tasks last
    pub async fn refresh(&mut self, store: &dyn RecordStore) {
        self.state = ViewState::Loading;
        let query = Query::new().tour(self.config.tour_id).sort_by(SortField::DueDate);
        match store.fetch_tasks(&query).await {
            Ok(tasks) => {
                tracing::info!("tasks loaded: {}", tasks.len());
                self.state = ViewState::Ready(tasks);
            }
            Err(e) => {
                tracing::error!("tasks load failed: {e}");
                self.state = ViewState::Failed(e);
            }
        }
    }
}
