//! Travel types.
//!
//! A `Travel` is one trip: the segments the traveller used from leaving
//! their base until they came back (or ran out of onward segments).

use chrono::NaiveDateTime;

use super::{ConnectionRule, LocationCode, Segment, Transport};

/// A grouped sequence of connected segments forming one trip.
///
/// Segments are kept in the order they were added, which the grouping
/// algorithm guarantees is chronological.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Travel {
    base: LocationCode,
    rule: ConnectionRule,
    segments: Vec<Segment>,
}

impl Travel {
    /// Create an empty travel for a traveller based at `base`.
    pub fn new(base: LocationCode) -> Self {
        Self::with_rule(base, ConnectionRule::default())
    }

    /// Create an empty travel that infers its destination with `rule`.
    pub fn with_rule(base: LocationCode, rule: ConnectionRule) -> Self {
        Self {
            base,
            rule,
            segments: Vec::new(),
        }
    }

    /// Create a travel from segments already in order.
    pub fn from_segments(base: LocationCode, segments: Vec<Segment>) -> Self {
        Self {
            base,
            rule: ConnectionRule::default(),
            segments,
        }
    }

    /// Append a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Returns the traveller's base.
    pub fn base(&self) -> LocationCode {
        self.base
    }

    /// Returns the segments in travel order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the first segment, if any.
    pub fn first(&self) -> Option<&Segment> {
        self.segments.first()
    }

    /// Returns the last segment, if any.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if no segments have been added.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start of the first segment.
    pub fn start(&self) -> Option<NaiveDateTime> {
        self.first().map(Segment::start)
    }

    /// End of the last segment.
    pub fn end(&self) -> Option<NaiveDateTime> {
        self.last().map(Segment::end)
    }

    /// Split the transport segments into hop groups.
    ///
    /// Transports are taken in start order. A transport joins the current
    /// group if it connects from the group's last transport and does not
    /// arrive at the base; otherwise it starts a new group. Stays are
    /// ignored.
    pub fn hop_groups(&self) -> Vec<Vec<&Transport>> {
        let mut transports: Vec<(&Segment, &Transport)> = self
            .segments
            .iter()
            .filter_map(|s| s.as_transport().map(|t| (s, t)))
            .collect();
        transports.sort_by_key(|(_, t)| t.start);

        let mut groups: Vec<Vec<&Transport>> = Vec::new();
        let mut current: Vec<&Transport> = Vec::new();
        let mut previous: Option<&Segment> = None;

        for (segment, transport) in transports {
            let joins = previous.is_some_and(|prev| {
                self.rule.connects(prev, segment) && transport.destination != self.base
            });

            if !joins && !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
            current.push(transport);
            previous = Some(segment);
        }

        if !current.is_empty() {
            groups.push(current);
        }

        groups
    }

    /// The trip's destination.
    ///
    /// - No transports at all: the base.
    /// - One hop group: where that group ends.
    /// - Several hop groups: the origin of the group at index `len / 2`.
    ///   This picks the leg the traveller set out on after the first
    ///   return, which for the usual out-and-back shapes is the place
    ///   they spent the trip at. It is a heuristic, not a definition.
    pub fn destination(&self) -> LocationCode {
        let groups = self.hop_groups();

        match groups.len() {
            0 => self.base,
            1 => groups[0]
                .last()
                .map_or(self.base, |t| t.destination),
            n => groups[n / 2].first().map_or(self.base, |t| t.origin),
        }
    }
}
