//! Domain error types.
//!
//! These errors represent validation failures when constructing segments
//! and connection rules.
//! They are distinct from file and parsing errors.

use chrono::NaiveDateTime;

/// Domain-level errors for segment construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Segment ends before it starts
    #[error("segment ends at {end} before it starts at {start}")]
    EndsBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Connection window outside the accepted range
    #[error("connection window of {0} hours is out of range")]
    InvalidWindow(i64),
}
