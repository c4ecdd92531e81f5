//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::{SharedError, SharedResult};

/// Unique identifier for one run session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> SharedResult<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidRunId { input: s.to_string() })
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of sorting algorithms the engine implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmId {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
}

impl AlgorithmId {
    /// Stable lowercase identifier used on the command interface
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::Bubble => "bubble",
            AlgorithmId::Selection => "selection",
            AlgorithmId::Insertion => "insertion",
            AlgorithmId::Merge => "merge",
            AlgorithmId::Quick => "quick",
            AlgorithmId::Heap => "heap",
            AlgorithmId::Counting => "counting",
            AlgorithmId::Radix => "radix",
        }
    }

    /// Counting and radix sort index by value, so they only accept values >= 0
    pub fn requires_non_negative(&self) -> bool {
        matches!(self, AlgorithmId::Counting | AlgorithmId::Radix)
    }

    pub fn descriptor(&self) -> &'static AlgorithmDescriptor {
        AlgorithmDescriptor::get(*self)
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALGORITHMS
            .iter()
            .map(|descriptor| descriptor.id)
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SharedError::UnknownAlgorithm { id: s.to_string() })
    }
}

/// Read-only description of a sorting algorithm shown next to the picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmDescriptor {
    pub id: AlgorithmId,
    pub name: &'static str,
    pub how_it_works: &'static str,
    pub complexity: &'static str,
}

impl AlgorithmDescriptor {
    /// Look up the catalog entry for an id
    pub fn get(id: AlgorithmId) -> &'static AlgorithmDescriptor {
        // Catalog order mirrors the enum declaration order.
        &ALGORITHMS[id as usize]
    }

    pub fn requires_non_negative(&self) -> bool {
        self.id.requires_non_negative()
    }
}

/// Catalog of every algorithm, in picker order
pub static ALGORITHMS: [AlgorithmDescriptor; 8] = [
    AlgorithmDescriptor {
        id: AlgorithmId::Bubble,
        name: "Bubble Sort",
        how_it_works: "Walks the list comparing neighbours and swaps any pair that is out of order, \
                       so the largest remaining value drifts to the end on every pass.",
        complexity: "O(n²) comparisons; fine for short lists, slow for long ones",
    },
    AlgorithmDescriptor {
        id: AlgorithmId::Selection,
        name: "Selection Sort",
        how_it_works: "Scans the unsorted tail for its smallest value and swaps it into the next \
                       position, growing a sorted prefix one element at a time.",
        complexity: "O(n²) comparisons, at most n - 1 swaps",
    },
    AlgorithmDescriptor {
        id: AlgorithmId::Insertion,
        name: "Insertion Sort",
        how_it_works: "Takes each value in turn and shifts larger values right until the gap \
                       where it belongs opens up, like ordering a hand of cards.",
        complexity: "O(n²) worst case; close to O(n) on nearly sorted input",
    },
    AlgorithmDescriptor {
        id: AlgorithmId::Merge,
        name: "Merge Sort",
        how_it_works: "Splits the list in half until pieces hold one value, then merges \
                       neighbouring pieces back together in order.",
        complexity: "O(n log n) in every case",
    },
    AlgorithmDescriptor {
        id: AlgorithmId::Quick,
        name: "Quick Sort",
        how_it_works: "Uses the last value as a pivot, moves smaller values in front of it, places \
                       the pivot between the two groups and repeats on each side.",
        complexity: "O(n log n) on average, O(n²) on already ordered input",
    },
    AlgorithmDescriptor {
        id: AlgorithmId::Heap,
        name: "Heap Sort",
        how_it_works: "Arranges the list as a max-heap, then repeatedly swaps the top of the heap \
                       to the end of the unsorted region and restores the heap.",
        complexity: "O(n log n) in every case, sorts in place",
    },
    AlgorithmDescriptor {
        id: AlgorithmId::Counting,
        name: "Counting Sort",
        how_it_works: "Counts how often each value occurs, turns the counts into final positions \
                       and drops every value straight into its slot.",
        complexity: "O(n + k) where k is the largest value; non-negative integers only",
    },
    AlgorithmDescriptor {
        id: AlgorithmId::Radix,
        name: "Radix Sort",
        how_it_works: "Runs a stable counting pass on the ones digit, then the tens, and so on \
                       until the largest value runs out of digits.",
        complexity: "O(d·(n + 10)) for d decimal digits; non-negative integers only",
    },
];

/// Immutable copy of the array at one observable instant of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 1-based emission index within the run
    pub step: u64,
    pub values: Vec<i64>,
}

impl Snapshot {
    pub fn new(step: u64, values: Vec<i64>) -> Self {
        Self { step, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Running/idle flag published to the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
}

impl RunStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, RunStatus::Running)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Idle => write!(f, "idle"),
            RunStatus::Running => write!(f, "running"),
        }
    }
}
