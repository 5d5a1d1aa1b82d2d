//! Reading reservation segments from text files.

mod error;
mod parse;

use std::path::Path;

use tracing::info;

pub use error::ReservationError;
pub use parse::{
    ParsedReservations, RejectedLine, SEGMENT_PREFIX, parse_reservations, parse_segment,
};

/// Read and parse the reservation file at `path`.
///
/// Unreadable files are fatal; individual bad lines are reported in
/// [`ParsedReservations::rejected`]. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD, so they only affect the line they appear on.
pub fn load_reservations(path: &Path) -> Result<ParsedReservations, ReservationError> {
    let bytes = std::fs::read(path).map_err(|source| ReservationError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = parse_reservations(&String::from_utf8_lossy(&bytes));
    info!(
        path = %path.display(),
        segments = parsed.segments.len(),
        rejected = parsed.rejected.len(),
        "Loaded reservations"
    );

    Ok(parsed)
}
