//! Reservation input error types.

use std::path::PathBuf;

/// Errors that can occur when reading reservations.
#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    /// The reservation file could not be read
    #[error("cannot read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A segment line has an unknown kind or the wrong shape
    #[error("invalid segment: {0}")]
    InvalidSegment(String),

    /// A segment line has an impossible date or time
    #[error("invalid date: {0}")]
    InvalidDate(String),
}
