//! Configuration for segment grouping.

use crate::domain::{ConnectionRule, DomainError, LocationCode};

/// Configuration parameters for grouping segments into travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingConfig {
    /// The traveller's home location. Travels start and end here.
    pub base: LocationCode,

    /// Rule deciding whether one segment can follow another.
    pub rule: ConnectionRule,
}

impl GroupingConfig {
    /// Create a configuration for the given base with the default 24 hour window.
    pub fn new(base: LocationCode) -> Self {
        Self {
            base,
            rule: ConnectionRule::default(),
        }
    }

    /// Replace the connection window, in hours.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `hours` is negative or longer than a year.
    pub fn with_window_hours(mut self, hours: i64) -> Result<Self, DomainError> {
        self.rule = ConnectionRule::from_hours(hours)?;
        Ok(self)
    }
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self::new(LocationCode::SVQ)
    }
}
