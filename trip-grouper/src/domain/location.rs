//! Location code types.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid location code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location code: {reason}")]
pub struct InvalidLocationCode {
    reason: &'static str,
}

/// A 3-character airport, station or city code.
///
/// Codes are exactly 3 ASCII alphanumeric characters. Comparison is
/// exact, so `svq` and `SVQ` are different locations.
///
/// # Examples
///
/// ```
/// use trip_grouper::domain::LocationCode;
///
/// let svq = LocationCode::parse("SVQ").unwrap();
/// assert_eq!(svq.as_str(), "SVQ");
///
/// // Case matters
/// assert_ne!(svq, LocationCode::parse("svq").unwrap());
///
/// // Wrong length is rejected
/// assert!(LocationCode::parse("SV").is_err());
/// assert!(LocationCode::parse("SVQA").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationCode([u8; 3]);

impl LocationCode {
    /// Seville, the default base.
    pub const SVQ: LocationCode = LocationCode(*b"SVQ");

    /// Parse a location code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLocationCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidLocationCode {
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_alphanumeric) {
            return Err(InvalidLocationCode {
                reason: "must be ASCII letters or digits",
            });
        }

        Ok(LocationCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII alphanumerics are ever stored
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl FromStr for LocationCode {
    type Err = InvalidLocationCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationCode({})", self.as_str())
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
