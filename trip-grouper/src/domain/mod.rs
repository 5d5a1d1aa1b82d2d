//! Domain types for trip grouping.
//!
//! This module contains the core model: location codes, reservation
//! segments, the rule deciding whether one segment follows another, and
//! the `Travel` aggregate. Segments enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod connection;
mod error;
mod location;
mod segment;
mod time;
mod travel;

pub use connection::{
    ConnectionRule, DEFAULT_CONNECTION_WINDOW_HOURS, MAX_CONNECTION_WINDOW_HOURS, connects,
};
pub use error::DomainError;
pub use location::{InvalidLocationCode, LocationCode};
pub use segment::{Segment, Stay, Transport, TransportKind};
pub use time::{
    DATE_FORMAT, DATETIME_FORMAT, TIME_FORMAT, TimeError, arrival_after, parse_date, parse_hhmm,
};
pub use travel::Travel;
