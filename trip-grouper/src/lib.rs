//! Travel itinerary grouper.
//!
//! Reads a traveller's flight, train and hotel reservations and answers:
//! "which trips did these bookings make up, and where did each trip go?"

pub mod domain;
pub mod grouping;
pub mod pipeline;
pub mod report;
pub mod reservations;
