//! Store-level errors
//!
//! A store failure halts the consuming view in a failed state; no derived
//! computation runs on a partial fetch.

/// Errors from the record store
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Store unreachable or refused the request
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Store rejected the query shape
    #[error("bad query: {0}")]
    Query(String),

    /// Store returned rows the model could not decode
    #[error("decode failed: {0}")]
    Decode(String),
}

impl StoreError {
    /// True when a later retry could plausibly succeed
    #[inline]
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_detail() {
        let err = StoreError::Unavailable("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn transient_classification() {
        assert!(StoreError::Unavailable("down".to_string()).is_transient());
        assert!(!StoreError::Query("bad field".to_string()).is_transient());
        assert!(!StoreError::Decode("bad row".to_string()).is_transient());
    }
}
