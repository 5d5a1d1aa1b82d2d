//! End-to-end run: load reservations, group them, print the report.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::grouping::{GroupingConfig, GroupingError, partition_segments};
use crate::report::{ReportError, ReportStyle, TextReport};
use crate::reservations::{ReservationError, load_reservations};

/// Any error that aborts a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Reservation(#[from] ReservationError),

    #[error(transparent)]
    Grouping(#[from] GroupingError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl Error {
    /// One-line message for the user.
    pub fn diagnostic(&self) -> String {
        match self {
            Error::Reservation(e @ ReservationError::FileRead { .. }) => {
                format!("Fatal file error: {e}")
            }
            Error::Reservation(e) => format!("Data validation error: {e}"),
            Error::Grouping(GroupingError::EmptyItinerary) => {
                "No travel segments found in input file".to_string()
            }
            Error::Report(e) => format!("Output error: {e}"),
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Valid segments read from the input.
    pub segments: usize,
    /// Segment lines skipped as invalid.
    pub rejected_lines: usize,
    /// Travels printed.
    pub travels: usize,
    /// Segments not part of any travel.
    pub dropped: usize,
}

/// Group the reservations in `input` and write the report to `out`.
///
/// Nothing is written unless grouping succeeds.
pub fn run<W: Write>(
    input: &Path,
    config: &GroupingConfig,
    style: ReportStyle,
    out: &mut W,
) -> Result<Summary, Error> {
    let parsed = load_reservations(input)?;
    let segments = parsed.segments.len();
    let rejected_lines = parsed.rejected.len();

    let grouping = partition_segments(parsed.segments, config)?;

    TextReport::new(style).write(out, &grouping.travels)?;

    let summary = Summary {
        segments,
        rejected_lines,
        travels: grouping.travels.len(),
        dropped: grouping.unclaimed.len(),
    };
    info!(
        travels = summary.travels,
        dropped = summary.dropped,
        rejected = summary.rejected_lines,
        "Report written"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocationCode;

    const SAMPLE: &str = "\
BASED: SVQ

RESERVATION
SEGMENT: Flight SVQ 2023-03-02 06:40 -> BCN 09:10

RESERVATION
SEGMENT: Hotel BCN 2023-01-05 -> 2023-01-10

RESERVATION
SEGMENT: Flight SVQ 2023-01-05 20:40 -> BCN 22:10
SEGMENT: Flight BCN 2023-01-10 10:30 -> SVQ 11:50

RESERVATION
SEGMENT: Train SVQ 2023-02-15 09:30 -> MAD 11:00
SEGMENT: Train MAD 2023-02-17 17:00 -> SVQ 19:30

RESERVATION
SEGMENT: Hotel MAD 2023-02-15 -> 2023-02-17

RESERVATION
SEGMENT: Flight BCN 2023-03-02 15:00 -> NYC 22:45
";

    const EXPECTED: &str = "\
TRIP to BCN
Flight from SVQ to BCN at 2023-01-05 20:40 to 22:10
Hotel at BCN on 2023-01-05 to 2023-01-10
Flight from BCN to SVQ at 2023-01-10 10:30 to 11:50

TRIP to MAD
Train from SVQ to MAD at 2023-02-15 09:30 to 11:00
Hotel at MAD on 2023-02-15 to 2023-02-17
Train from MAD to SVQ at 2023-02-17 17:00 to 19:30

TRIP to NYC
Flight from SVQ to BCN at 2023-03-02 06:40 to 09:10
Flight from BCN to NYC at 2023-03-02 15:00 to 22:45
";

    fn input_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn end_to_end_sample() {
        let file = input_file(SAMPLE);
        let mut out = Vec::new();

        let summary = run(
            file.path(),
            &GroupingConfig::default(),
            ReportStyle::Compact,
            &mut out,
        )
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
        assert_eq!(
            summary,
            Summary {
                segments: 8,
                rejected_lines: 0,
                travels: 3,
                dropped: 0,
            }
        );
    }

    #[test]
    fn bad_lines_are_skipped() {
        let content = format!("{SAMPLE}SEGMENT: Bus SVQ 2023-01-01 10:00 -> MAD 12:00\n");
        let file = input_file(&content);
        let mut out = Vec::new();

        let summary = run(
            file.path(),
            &GroupingConfig::default(),
            ReportStyle::Compact,
            &mut out,
        )
        .unwrap();

        assert_eq!(summary.rejected_lines, 1);
        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
    }

    #[test]
    fn different_base() {
        let file = input_file(SAMPLE);
        let mut out = Vec::new();
        let config = GroupingConfig::new(LocationCode::parse("BCN").unwrap());

        let summary = run(file.path(), &config, ReportStyle::Compact, &mut out).unwrap();

        // Only the two departures from BCN seed travels; the first one
        // returns through the earlier SVQ -> BCN flight.
        let expected = "\
TRIP to BCN
Flight from BCN to SVQ at 2023-01-10 10:30 to 11:50
Flight from SVQ to BCN at 2023-01-05 20:40 to 22:10

TRIP to NYC
Flight from BCN to NYC at 2023-03-02 15:00 to 22:45
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(
            summary,
            Summary {
                segments: 8,
                rejected_lines: 0,
                travels: 2,
                dropped: 5,
            }
        );
    }

    #[test]
    fn non_utf8_bytes_outside_segments() {
        let mut content = SAMPLE.as_bytes().to_vec();
        content.extend_from_slice(b"NOTE: caf\xe9 con leche\n");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&content).unwrap();
        let mut out = Vec::new();

        let summary = run(
            file.path(),
            &GroupingConfig::default(),
            ReportStyle::Compact,
            &mut out,
        )
        .unwrap();

        assert_eq!(summary.rejected_lines, 0);
        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
    }

    #[test]
    fn no_segments_is_empty_itinerary() {
        let file = input_file("RESERVATION\nSEGMENT: Hotel MISSING_DATE\n");
        let mut out = Vec::new();

        let err = run(
            file.path(),
            &GroupingConfig::default(),
            ReportStyle::Compact,
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, Error::Grouping(GroupingError::EmptyItinerary)));
        assert_eq!(err.diagnostic(), "No travel segments found in input file");
        assert!(out.is_empty());
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();

        let err = run(
            &dir.path().join("missing.txt"),
            &GroupingConfig::default(),
            ReportStyle::Compact,
            &mut out,
        )
        .unwrap_err();

        assert!(err.diagnostic().starts_with("Fatal file error: "));
        assert!(out.is_empty());
    }

    #[test]
    fn data_validation_diagnostic() {
        let err = Error::from(ReservationError::InvalidDate("2023-13-01".into()));
        assert_eq!(
            err.diagnostic(),
            "Data validation error: invalid date: 2023-13-01"
        );
    }
}
