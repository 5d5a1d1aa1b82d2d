//! Reservation text parsing.
//!
//! Reservation files mix free text with segment lines such as:
//!
//! ```text
//! RESERVATION
//! SEGMENT: Flight SVQ 2023-01-05 20:40 -> BCN 22:10
//! SEGMENT: Hotel BCN 2023-01-05 -> 2023-01-10
//! ```
//!
//! Only lines starting with `SEGMENT: ` are parsed. A bad segment line is
//! logged and skipped; it never aborts the rest of the file.

use tracing::{debug, warn};

use crate::domain::{
    DomainError, LocationCode, Segment, TimeError, TransportKind, arrival_after, parse_date,
    parse_hhmm,
};

use super::error::ReservationError;

/// Prefix marking a segment line.
pub const SEGMENT_PREFIX: &str = "SEGMENT: ";

const ARROW: &str = "->";

/// A segment line that could not be parsed.
#[derive(Debug)]
pub struct RejectedLine {
    /// 1-based line number in the input.
    pub line: usize,
    /// Why the line was rejected.
    pub error: ReservationError,
}

/// Outcome of parsing a reservation text.
#[derive(Debug, Default)]
pub struct ParsedReservations {
    /// Valid segments, sorted by start time (stable).
    pub segments: Vec<Segment>,
    /// Segment lines that were skipped.
    pub rejected: Vec<RejectedLine>,
}

/// Parse every segment line in `text`.
///
/// # Examples
///
/// ```
/// use trip_grouper::reservations::parse_reservations;
///
/// let text = "RESERVATION\nSEGMENT: Flight SVQ 2023-03-02 06:40 -> BCN 09:10\nSEGMENT: Bus SVQ\n";
/// let parsed = parse_reservations(text);
///
/// assert_eq!(parsed.segments.len(), 1);
/// assert_eq!(parsed.rejected.len(), 1);
/// assert_eq!(parsed.rejected[0].line, 3);
/// ```
pub fn parse_reservations(text: &str) -> ParsedReservations {
    let mut parsed = ParsedReservations::default();

    for (idx, raw) in text.lines().enumerate() {
        let Some(body) = raw.strip_prefix(SEGMENT_PREFIX) else {
            continue;
        };

        match parse_segment(body.trim_end()) {
            Ok(segment) => parsed.segments.push(segment),
            Err(error) => {
                warn!(line = idx + 1, error = %error, "Skipping reservation line");
                parsed.rejected.push(RejectedLine {
                    line: idx + 1,
                    error,
                });
            }
        }
    }

    parsed.segments.sort_by_key(Segment::start);

    debug!(
        segments = parsed.segments.len(),
        rejected = parsed.rejected.len(),
        "Parsed reservations"
    );

    parsed
}

/// Parse the body of one segment line (without the `SEGMENT: ` prefix).
///
/// # Errors
///
/// - [`ReservationError::InvalidSegment`] for an unknown kind, a wrong
///   shape or a malformed location code
/// - [`ReservationError::InvalidDate`] for an impossible date or time, or
///   a segment that ends before it starts
pub fn parse_segment(body: &str) -> Result<Segment, ReservationError> {
    let tokens: Vec<&str> = body.split_whitespace().collect();

    match tokens.first().copied() {
        Some("Flight") => parse_transport(TransportKind::Flight, body, &tokens),
        Some("Train") => parse_transport(TransportKind::Train, body, &tokens),
        Some("Hotel") => parse_stay(body, &tokens),
        _ => Err(ReservationError::InvalidSegment(format!(
            "unknown segment type: {body}"
        ))),
    }
}

/// `<Kind> <ORIG> <YYYY-MM-DD> <HH:MM> -> <DEST> <HH:MM>`
fn parse_transport(
    kind: TransportKind,
    body: &str,
    tokens: &[&str],
) -> Result<Segment, ReservationError> {
    let [_, origin, date, departs, arrow, destination, arrives] = tokens else {
        return Err(invalid_format(kind.as_str(), body));
    };
    if *arrow != ARROW {
        return Err(invalid_format(kind.as_str(), body));
    }

    let origin = location(origin, body)?;
    let destination = location(destination, body)?;

    let date = parse_date(date).map_err(|e| invalid_date(e, body))?;
    let start = date.and_time(parse_hhmm(departs).map_err(|e| invalid_date(e, body))?);
    let arrival = parse_hhmm(arrives).map_err(|e| invalid_date(e, body))?;
    let end = arrival_after(start, arrival)
        .ok_or_else(|| ReservationError::InvalidDate(format!("arrival out of range in: {body}")))?;

    Segment::transport(kind, origin, destination, start, end).map_err(|e| ordering(e, body))
}

/// `Hotel <LOC> <YYYY-MM-DD> -> <YYYY-MM-DD>`
fn parse_stay(body: &str, tokens: &[&str]) -> Result<Segment, ReservationError> {
    let [_, location_code, check_in, arrow, check_out] = tokens else {
        return Err(invalid_format("Hotel", body));
    };
    if *arrow != ARROW {
        return Err(invalid_format("Hotel", body));
    }

    let location_code = location(location_code, body)?;
    let check_in = parse_date(check_in).map_err(|e| invalid_date(e, body))?;
    let check_out = parse_date(check_out).map_err(|e| invalid_date(e, body))?;

    Segment::stay(
        location_code,
        check_in.and_time(chrono::NaiveTime::MIN),
        check_out.and_time(chrono::NaiveTime::MIN),
    )
    .map_err(|e| ordering(e, body))
}

fn location(code: &str, body: &str) -> Result<LocationCode, ReservationError> {
    LocationCode::parse(code)
        .map_err(|e| ReservationError::InvalidSegment(format!("{e} '{code}' in: {body}")))
}

fn invalid_format(kind: &str, body: &str) -> ReservationError {
    ReservationError::InvalidSegment(format!("invalid {kind} format: {body}"))
}

fn invalid_date(error: TimeError, body: &str) -> ReservationError {
    ReservationError::InvalidDate(format!("{error} in: {body}"))
}

fn ordering(error: DomainError, body: &str) -> ReservationError {
    ReservationError::InvalidDate(format!("{error} in: {body}"))
}
