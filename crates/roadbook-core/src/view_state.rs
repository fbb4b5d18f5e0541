//! View lifecycle state
//!
//! Every controller's data goes through the same three phases. A failed
//! fetch parks the view in `Failed`; nothing downstream observes partial
//! data.

use roadbook_store::StoreError;

/// Lifecycle of one view's data
#[derive(Debug, Clone)]
pub enum ViewState<T> {
    /// Fetch in flight (also the initial state)
    Loading,
    /// Fetch failed; the error is kept for display
    Failed(StoreError),
    /// Fetch settled and derivations ran
    Ready(T),
}

impl<T> ViewState<T> {
    /// The ready payload, if the view has one
    #[inline]
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// True while the fetch is in flight
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The failure, if the last fetch failed
    #[inline]
    #[must_use]
    pub fn failure(&self) -> Option<&StoreError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Loading
    }
}
