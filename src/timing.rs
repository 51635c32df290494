// Single-shot timing harness and the measurement records it produces.

use std::fmt;
use std::time::{Duration, Instant};

use crate::dataset::Dataset;
use crate::search::{self, binary_search, linear_search};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Linear,
    Binary,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Linear, Algorithm::Binary];

    pub fn run<T: Ord>(self, data: &[T], target: &T) -> Option<usize> {
        match self {
            Algorithm::Linear => linear_search(data, target),
            Algorithm::Binary => binary_search(data, target),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Linear => write!(f, "linear"),
            Algorithm::Binary => write!(f, "binary"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Present,
    Absent,
}

impl TargetKind {
    pub const ALL: [TargetKind; 2] = [TargetKind::Present, TargetKind::Absent];
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Present => write!(f, "present"),
            TargetKind::Absent => write!(f, "absent"),
        }
    }
}

/// One timed scan invocation. Never mutated after creation.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub target_kind: TargetKind,
    pub elapsed: Duration,
    pub found: Option<usize>,
}

/// The measurements taken for a single dataset size, in execution order.
#[derive(Debug, Clone)]
pub struct SizeReport {
    pub size: usize,
    pub measurements: Vec<Measurement>,
}

/// Runs one scan, reading a monotonic clock immediately before and after.
/// Single-shot: no warmup, no retries, no averaging.
pub fn time_search<T: Ord>(
    algorithm: Algorithm,
    data: &[T],
    target: &T,
) -> (Option<usize>, Duration) {
    let start = Instant::now();
    let found = algorithm.run(data, target);
    (found, start.elapsed())
}

/// Times every (algorithm x target-kind) combination against the dataset:
/// present target first, linear before binary within each target.
pub fn run_comparison(dataset: &Dataset, present: i64, absent: i64) -> Vec<Measurement> {
    debug_assert!(search::is_sorted(dataset.values()));

    let mut measurements = Vec::with_capacity(4);
    for target_kind in TargetKind::ALL {
        let target = match target_kind {
            TargetKind::Present => present,
            TargetKind::Absent => absent,
        };
        for algorithm in Algorithm::ALL {
            let (found, elapsed) = time_search(algorithm, dataset.values(), &target);
            measurements.push(Measurement {
                algorithm,
                target_kind,
                elapsed,
                found,
            });
        }
    }
    measurements
}
