//! Greedy segment grouping.
//!
//! Every transport leaving the base seeds one travel. Each travel is then
//! extended one segment at a time from an unclaimed pool until it returns
//! to the base or nothing else connects.

use tracing::{debug, trace};

use crate::domain::{LocationCode, Segment, Travel};

use super::config::GroupingConfig;

/// Error from segment grouping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupingError {
    /// There were no segments to group at all
    #[error("no segments provided for grouping")]
    EmptyItinerary,
}

/// Result of grouping: the travels, plus the segments no travel claimed.
#[derive(Debug, Clone)]
pub struct Grouping {
    /// Travels, ordered by the start of their first segment.
    pub travels: Vec<Travel>,

    /// Segments that were not reachable from any seed, in start order.
    pub unclaimed: Vec<Segment>,
}

/// Segments waiting to be claimed by a travel.
///
/// Slots are sorted by start time once and never move; claiming a segment
/// takes it out of its slot, so an index always refers to the same segment
/// and no segment can be claimed twice.
struct Pool {
    slots: Vec<Option<Segment>>,
}

impl Pool {
    fn new(mut segments: Vec<Segment>) -> Self {
        // Stable: equal start times keep their input order
        segments.sort_by_key(Segment::start);
        Self {
            slots: segments.into_iter().map(Some).collect(),
        }
    }

    /// Index of the first unclaimed segment matching `predicate`.
    fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: Fn(&Segment) -> bool,
    {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(&predicate))
    }

    /// Indices of every unclaimed segment matching `predicate`.
    fn positions<F>(&self, predicate: F) -> Vec<usize>
    where
        F: Fn(&Segment) -> bool,
    {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().filter(|s| predicate(*s)).map(|_| idx))
            .collect()
    }

    /// Take the segment at `idx` out of the pool.
    fn claim(&mut self, idx: usize) -> Option<Segment> {
        self.slots.get_mut(idx).and_then(Option::take)
    }

    fn into_unclaimed(self) -> Vec<Segment> {
        self.slots.into_iter().flatten().collect()
    }
}

/// Groups segments into travels.
pub struct Grouper<'a> {
    config: &'a GroupingConfig,
}

impl<'a> Grouper<'a> {
    /// Create a new grouper.
    pub fn new(config: &'a GroupingConfig) -> Self {
        Self { config }
    }

    /// Partition `segments` into travels and unclaimed segments.
    ///
    /// # Errors
    ///
    /// Returns [`GroupingError::EmptyItinerary`] if `segments` is empty.
    pub fn group(&self, segments: Vec<Segment>) -> Result<Grouping, GroupingError> {
        if segments.is_empty() {
            return Err(GroupingError::EmptyItinerary);
        }

        let total = segments.len();
        let mut pool = Pool::new(segments);
        let base = self.config.base;

        let seeds = find_seeds(&pool, base);
        debug!(segments = total, seeds = seeds.len(), base = %base, "Grouping segments");

        let mut travels: Vec<Travel> = seeds
            .into_iter()
            .filter_map(|seed| self.build_travel(&mut pool, seed))
            .collect();

        // Stable: travels with the same start keep seed order
        travels.sort_by_key(|travel| travel.start());

        let unclaimed = pool.into_unclaimed();
        for segment in &unclaimed {
            debug!(
                from = %segment.departure_location(),
                to = %segment.current_location(),
                start = %segment.start(),
                "Segment not reachable from base, dropping"
            );
        }

        debug!(
            travels = travels.len(),
            dropped = unclaimed.len(),
            "Grouping complete"
        );

        Ok(Grouping { travels, unclaimed })
    }

    /// Follow connections from `seed` until home or stuck.
    ///
    /// Returns `None` if the seed was already claimed by an earlier travel.
    fn build_travel(&self, pool: &mut Pool, seed: usize) -> Option<Travel> {
        let base = self.config.base;
        let rule = self.config.rule;

        let first = pool.claim(seed)?;
        let mut travel = Travel::with_rule(base, rule);
        travel.push(first);

        while let Some(current) = travel.last() {
            if current.current_location() == base {
                break;
            }

            // Transports take priority over stays; within each, earliest start wins
            let next = pool
                .position(|s| s.is_transport() && rule.connects(current, s))
                .or_else(|| pool.position(|s| s.is_stay() && rule.connects(current, s)));

            match next.and_then(|idx| pool.claim(idx)) {
                Some(segment) => {
                    trace!(
                        from = %segment.departure_location(),
                        to = %segment.current_location(),
                        "Extending travel"
                    );
                    travel.push(segment);
                }
                None => break,
            }
        }

        debug!(
            segments = travel.len(),
            destination = %travel.destination(),
            "Built travel"
        );

        Some(travel)
    }
}

/// Segments that start a travel.
///
/// Transports departing the base; if there are none, stays at the base.
fn find_seeds(pool: &Pool, base: LocationCode) -> Vec<usize> {
    let departures = pool.positions(|s| s.as_transport().is_some_and(|t| t.origin == base));
    if !departures.is_empty() {
        return departures;
    }

    pool.positions(|s| s.as_stay().is_some_and(|stay| stay.location == base))
}

/// Group segments into travels, discarding unclaimed segments.
///
/// # Errors
///
/// Returns [`GroupingError::EmptyItinerary`] if `segments` is empty.
pub fn group_segments(
    segments: Vec<Segment>,
    config: &GroupingConfig,
) -> Result<Vec<Travel>, GroupingError> {
    partition_segments(segments, config).map(|grouping| grouping.travels)
}

/// Group segments into travels, also returning the unclaimed segments.
///
/// # Errors
///
/// Returns [`GroupingError::EmptyItinerary`] if `segments` is empty.
pub fn partition_segments(
    segments: Vec<Segment>,
    config: &GroupingConfig,
) -> Result<Grouping, GroupingError> {
    Grouper::new(config).group(segments)
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
