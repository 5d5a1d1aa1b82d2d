//! Plain-text travel report.
//!
//! Each travel is printed as a `TRIP to <destination>` header followed by
//! one line per segment, with a blank line between travels:
//!
//! ```text
//! TRIP to BCN
//! Flight from SVQ to BCN at 2023-01-05 20:40 to 22:10
//! Hotel at BCN on 2023-01-05 to 2023-01-10
//! Flight from BCN to SVQ at 2023-01-10 10:30 to 11:50
//! ```

use std::io::{self, Write};

use crate::domain::{DATE_FORMAT, DATETIME_FORMAT, Segment, Stay, TIME_FORMAT, Transport, Travel};

/// Errors from writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Writing to the output failed
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// How transport end times are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportStyle {
    /// End as time of day only, e.g. `to 22:10`.
    #[default]
    Compact,
    /// End as full date and time, e.g. `to 2023-01-05 22:10`.
    Full,
}

/// Formats travels as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReport {
    style: ReportStyle,
}

impl TextReport {
    /// Create a report with the given style.
    pub fn new(style: ReportStyle) -> Self {
        Self { style }
    }

    /// Write all travels to `out`.
    pub fn write<W: Write>(&self, out: &mut W, travels: &[Travel]) -> Result<(), ReportError> {
        for (i, travel) in travels.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "TRIP to {}", travel.destination())?;
            for segment in travel.segments() {
                writeln!(out, "{}", self.format_segment(segment))?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Format a single segment line.
    pub fn format_segment(&self, segment: &Segment) -> String {
        match segment {
            Segment::Transport(transport) => self.format_transport(transport),
            Segment::Stay(stay) => format_stay(stay),
        }
    }

    fn format_transport(&self, transport: &Transport) -> String {
        let end_format = match self.style {
            ReportStyle::Compact => TIME_FORMAT,
            ReportStyle::Full => DATETIME_FORMAT,
        };
        format!(
            "{} from {} to {} at {} to {}",
            transport.kind,
            transport.origin,
            transport.destination,
            transport.start.format(DATETIME_FORMAT),
            transport.end.format(end_format),
        )
    }
}

fn format_stay(stay: &Stay) -> String {
    format!(
        "Hotel at {} on {} to {}",
        stay.location,
        stay.start.format(DATE_FORMAT),
        stay.end.format(DATE_FORMAT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocationCode, TransportKind};
    use chrono::{NaiveDate, NaiveDateTime};

    fn loc(s: &str) -> LocationCode {
        LocationCode::parse(s).unwrap()
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn transport(
        kind: TransportKind,
        from: &str,
        to: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Segment {
        Segment::transport(kind, loc(from), loc(to), start, end).unwrap()
    }

    fn render(report: &TextReport, travels: &[Travel]) -> String {
        let mut buf = Vec::new();
        report.write(&mut buf, travels).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn two_trips() -> Vec<Travel> {
        vec![
            Travel::from_segments(
                loc("BCN"),
                vec![
                    transport(
                        TransportKind::Flight,
                        "SVQ",
                        "BCN",
                        at(2023, 3, 2, 6, 40),
                        at(2023, 3, 2, 9, 10),
                    ),
                    Segment::stay(loc("BCN"), at(2023, 3, 2, 14, 0), at(2023, 3, 5, 10, 0))
                        .unwrap(),
                ],
            ),
            Travel::from_segments(
                loc("MAD"),
                vec![transport(
                    TransportKind::Train,
                    "SVQ",
                    "MAD",
                    at(2023, 2, 15, 9, 30),
                    at(2023, 2, 15, 11, 0),
                )],
            ),
        ]
    }

    #[test]
    fn multiple_trips() {
        let output = render(&TextReport::default(), &two_trips());

        let expected = "\
TRIP to BCN
Flight from SVQ to BCN at 2023-03-02 06:40 to 09:10
Hotel at BCN on 2023-03-02 to 2023-03-05

TRIP to MAD
Train from SVQ to MAD at 2023-02-15 09:30 to 11:00
";
        assert_eq!(output, expected);
    }

    #[test]
    fn no_trips_prints_nothing() {
        assert_eq!(render(&TextReport::default(), &[]), "");
    }

    #[test]
    fn overnight_compact_and_full() {
        let segment = transport(
            TransportKind::Flight,
            "SVQ",
            "NYC",
            at(2023, 4, 1, 23, 30),
            at(2023, 4, 2, 2, 15),
        );

        assert_eq!(
            TextReport::new(ReportStyle::Compact).format_segment(&segment),
            "Flight from SVQ to NYC at 2023-04-01 23:30 to 02:15"
        );
        assert_eq!(
            TextReport::new(ReportStyle::Full).format_segment(&segment),
            "Flight from SVQ to NYC at 2023-04-01 23:30 to 2023-04-02 02:15"
        );
    }

    #[test]
    fn hotel_shows_dates_only() {
        let stay = Segment::stay(loc("TST"), at(2023, 1, 1, 14, 0), at(2023, 1, 3, 10, 0)).unwrap();
        assert_eq!(
            TextReport::default().format_segment(&stay),
            "Hotel at TST on 2023-01-01 to 2023-01-03"
        );
    }

    #[test]
    fn write_to_failing_output() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = TextReport::default()
            .write(&mut Broken, &two_trips())
            .unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
