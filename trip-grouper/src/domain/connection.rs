//! Connection rule between segments.

use chrono::Duration;

use super::{DomainError, Segment};

/// Default grace window between one segment ending and the next starting.
pub const DEFAULT_CONNECTION_WINDOW_HOURS: i64 = 24;

/// Longest grace window accepted, one year.
pub const MAX_CONNECTION_WINDOW_HOURS: i64 = 24 * 365;

/// Decides whether one segment can follow another.
///
/// `next` follows `previous` when it departs from where `previous` leaves
/// the traveller, and starts no later than `window` after `previous` ends.
/// There is no lower bound on the start: only the upper bound is checked.
///
/// The rule is directional. `connects(a, b)` says nothing about
/// `connects(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionRule {
    window: Duration,
}

impl ConnectionRule {
    /// Create a rule with the given grace window.
    pub fn new(window: Duration) -> Self {
        Self { window }
    }

    /// Create a rule with a grace window in whole hours.
    ///
    /// # Errors
    ///
    /// Returns `Err` unless `0 <= hours <= MAX_CONNECTION_WINDOW_HOURS`.
    pub fn from_hours(hours: i64) -> Result<Self, DomainError> {
        if !(0..=MAX_CONNECTION_WINDOW_HOURS).contains(&hours) {
            return Err(DomainError::InvalidWindow(hours));
        }
        Duration::try_hours(hours)
            .map(Self::new)
            .ok_or(DomainError::InvalidWindow(hours))
    }

    /// Returns the grace window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns true if `next` can follow `previous`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_grouper::domain::{ConnectionRule, LocationCode, Segment, TransportKind};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2023, 3, 2).unwrap();
    /// let loc = |s| LocationCode::parse(s).unwrap();
    ///
    /// let first = Segment::transport(
    ///     TransportKind::Flight, loc("SVQ"), loc("BCN"),
    ///     date.and_hms_opt(6, 40, 0).unwrap(),
    ///     date.and_hms_opt(9, 10, 0).unwrap(),
    /// ).unwrap();
    /// let second = Segment::transport(
    ///     TransportKind::Flight, loc("BCN"), loc("NYC"),
    ///     date.and_hms_opt(15, 0, 0).unwrap(),
    ///     date.and_hms_opt(22, 45, 0).unwrap(),
    /// ).unwrap();
    ///
    /// let rule = ConnectionRule::default();
    /// assert!(rule.connects(&first, &second));
    /// assert!(!rule.connects(&second, &first));
    /// ```
    pub fn connects(&self, previous: &Segment, next: &Segment) -> bool {
        if next.departure_location() != previous.current_location() {
            return false;
        }

        match previous.end().checked_add_signed(self.window) {
            Some(latest) => next.start() <= latest,
            // Window runs past the representable range: anything later fits
            None => true,
        }
    }
}

impl Default for ConnectionRule {
    fn default() -> Self {
        Self::new(Duration::hours(DEFAULT_CONNECTION_WINDOW_HOURS))
    }
}

/// Returns true if `next` can follow `previous` under the default 24 hour window.
pub fn connects(previous: &Segment, next: &Segment) -> bool {
    ConnectionRule::default().connects(previous, next)
}
