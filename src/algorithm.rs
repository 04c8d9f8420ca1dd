use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;

use crate::ship::Ship;
use crate::sorts::{heap_sort, insertion_sort, merge_sort};

/// Selectable sort algorithm.
///
/// All three produce the same final ordering - ascending by year - for the
/// same input, modulo tie-break differences between stable and unstable
/// algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Insertion sort. O(n^2), stable.
    Insertion,
    /// Heap sort. O(n log n), not stable.
    Heap,
    /// Merge sort. O(n log n), stable.
    Merge,
}

impl Algorithm {
    /// Name of this algorithm as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Insertion => "insertion",
            Algorithm::Heap => "heap",
            Algorithm::Merge => "merge",
        }
    }

    /// Sort `ships` in place, ascending by year.
    pub fn run(&self, ships: &mut [Ship]) {
        match self {
            Algorithm::Insertion => insertion_sort(ships),
            Algorithm::Heap => heap_sort(ships),
            Algorithm::Merge => merge_sort(ships),
        }
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Algorithm, Self::Err> {
        match s {
            "insertion" => Ok(Algorithm::Insertion),
            "heap" => Ok(Algorithm::Heap),
            "merge" => Ok(Algorithm::Merge),
            other => Err(anyhow!("unknown algorithm: {}, expected one of: insertion, heap, merge", other)),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
