//! Grouping reservation segments into travels.
//!
//! This module implements the core algorithm: given every segment a
//! traveller booked and their home base, reconstruct the individual trips.
//! Each trip starts with a departure from the base and greedily follows
//! connecting segments until the traveller is home again.

mod config;
mod group;

pub use config::GroupingConfig;
pub use group::{Grouper, Grouping, GroupingError, group_segments, partition_segments};
