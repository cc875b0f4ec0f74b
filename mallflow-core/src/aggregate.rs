//! Per-trajectory results and their run-wide aggregation.
//!
//! Folding is commutative and associative: merging partial results in any
//! permutation, or partitioning them into groups merged independently and
//! then combined, yields identical totals. The parallel driver relies on
//! this to be free of completion-order effects.

use hashbrown::HashMap;

use crate::model::Direction;
use crate::{Count, LandmarkId};

/// Aggregation unit: one landmark approached from one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrossingKey {
    pub direction: Direction,
    pub landmark: LandmarkId,
}

/// Crossing and stop counts produced by scanning a single trajectory.
/// Absent keys are implicitly zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectoryResult {
    crossings: HashMap<CrossingKey, Count>,
    stops: HashMap<CrossingKey, Count>,
}

impl TrajectoryResult {
    /// Records one crossing, and one stop when the transition was made below
    /// the stop threshold. A stop is only ever recorded together with its
    /// crossing, so `stops <= crossings` holds for every key.
    pub(crate) fn record(&mut self, key: CrossingKey, stopped: bool) {
        *self.crossings.entry(key).or_insert(0) += 1;
        if stopped {
            *self.stops.entry(key).or_insert(0) += 1;
        }
    }

    pub fn crossings(&self, key: CrossingKey) -> Count {
        self.crossings.get(&key).copied().unwrap_or(0)
    }

    pub fn stops(&self, key: CrossingKey) -> Count {
        self.stops.get(&key).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.crossings.is_empty()
    }
}

/// Run-wide totals: created empty at run start, folded once per scanned
/// trajectory, read once by the report model at run end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    trip_count: Count,
    crossings: HashMap<CrossingKey, Count>,
    stops: HashMap<CrossingKey, Count>,
}

impl Totals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one trajectory's result into the totals. Every folded
    /// trajectory counts as a trip, including all-zero results.
    pub fn fold(&mut self, partial: TrajectoryResult) {
        self.trip_count += 1;
        for (key, count) in partial.crossings {
            *self.crossings.entry(key).or_insert(0) += count;
        }
        for (key, count) in partial.stops {
            *self.stops.entry(key).or_insert(0) += count;
        }
    }

    /// Combines two partial totals, for tree-shaped parallel reductions.
    pub fn merge(&mut self, other: Totals) {
        self.trip_count += other.trip_count;
        for (key, count) in other.crossings {
            *self.crossings.entry(key).or_insert(0) += count;
        }
        for (key, count) in other.stops {
            *self.stops.entry(key).or_insert(0) += count;
        }
    }

    pub fn trip_count(&self) -> Count {
        self.trip_count
    }

    pub fn crossings(&self, key: CrossingKey) -> Count {
        self.crossings.get(&key).copied().unwrap_or(0)
    }

    pub fn stops(&self, key: CrossingKey) -> Count {
        self.stops.get(&key).copied().unwrap_or(0)
    }
}
