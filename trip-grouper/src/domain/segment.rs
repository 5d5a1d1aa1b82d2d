//! Reservation segment types.
//!
//! A `Segment` is one reservation leg: either a transport (flight or train)
//! between two locations, or a stay (hotel) at a single location.

use std::fmt;

use chrono::NaiveDateTime;

use super::{DomainError, LocationCode};

/// The kind of transport a segment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    Flight,
    Train,
}

impl TransportKind {
    /// Returns the display name used in reservation files and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Flight => "Flight",
            TransportKind::Train => "Train",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transport leg from one location to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transport {
    pub kind: TransportKind,
    pub origin: LocationCode,
    pub destination: LocationCode,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A stay at a single location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stay {
    pub location: LocationCode,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// One reservation leg.
///
/// # Invariants
///
/// - `start <= end`, checked by the constructors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A flight or train
    Transport(Transport),
    /// A hotel stay
    Stay(Stay),
}

impl Segment {
    /// Construct a transport segment.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `end` is before `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_grouper::domain::{LocationCode, Segment, TransportKind};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2023, 3, 2).unwrap();
    /// let svq = LocationCode::parse("SVQ").unwrap();
    /// let bcn = LocationCode::parse("BCN").unwrap();
    ///
    /// let flight = Segment::transport(
    ///     TransportKind::Flight,
    ///     svq,
    ///     bcn,
    ///     date.and_hms_opt(6, 40, 0).unwrap(),
    ///     date.and_hms_opt(9, 10, 0).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// assert!(flight.is_transport());
    /// assert_eq!(flight.departure_location(), svq);
    /// assert_eq!(flight.current_location(), bcn);
    /// ```
    pub fn transport(
        kind: TransportKind,
        origin: LocationCode,
        destination: LocationCode,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        check_order(start, end)?;
        Ok(Segment::Transport(Transport {
            kind,
            origin,
            destination,
            start,
            end,
        }))
    }

    /// Construct a stay segment.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `end` is before `start`.
    pub fn stay(
        location: LocationCode,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        check_order(start, end)?;
        Ok(Segment::Stay(Stay {
            location,
            start,
            end,
        }))
    }

    /// Returns true if this is a stay.
    pub fn is_stay(&self) -> bool {
        matches!(self, Segment::Stay(_))
    }

    /// Returns true if this is a transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, Segment::Transport(_))
    }

    /// Where the traveller is once this segment ends.
    ///
    /// The destination of a transport, or the location of a stay.
    pub fn current_location(&self) -> LocationCode {
        match self {
            Segment::Transport(t) => t.destination,
            Segment::Stay(s) => s.location,
        }
    }

    /// Where the traveller must be for this segment to begin.
    ///
    /// The origin of a transport, or the location of a stay.
    pub fn departure_location(&self) -> LocationCode {
        match self {
            Segment::Transport(t) => t.origin,
            Segment::Stay(s) => s.location,
        }
    }

    /// Returns the start timestamp.
    pub fn start(&self) -> NaiveDateTime {
        match self {
            Segment::Transport(t) => t.start,
            Segment::Stay(s) => s.start,
        }
    }

    /// Returns the end timestamp.
    pub fn end(&self) -> NaiveDateTime {
        match self {
            Segment::Transport(t) => t.end,
            Segment::Stay(s) => s.end,
        }
    }

    /// Returns the transport if this is a transport segment.
    pub fn as_transport(&self) -> Option<&Transport> {
        match self {
            Segment::Transport(t) => Some(t),
            Segment::Stay(_) => None,
        }
    }

    /// Returns the stay if this is a stay segment.
    pub fn as_stay(&self) -> Option<&Stay> {
        match self {
            Segment::Transport(_) => None,
            Segment::Stay(s) => Some(s),
        }
    }
}

fn check_order(start: NaiveDateTime, end: NaiveDateTime) -> Result<(), DomainError> {
    if start > end {
        return Err(DomainError::EndsBeforeStart { start, end });
    }
    Ok(())
}
