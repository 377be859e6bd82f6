//! Per-step trace log.

use crate::objfun::Point;

/// One traced step of a trajectory search.
///
/// Float fields hold `NaN` and point fields hold `None` until recorded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceRecord {
    /// Temperature at this step.
    pub temperature: f64,
    /// Euclidean norm of `x - y`.
    pub mutation_size: f64,
    /// Current point before the acceptance decision.
    pub x: Option<Point>,
    /// Value of `x`.
    pub f_x: f64,
    /// Proposed point.
    pub y: Option<Point>,
    /// Value of `y`.
    pub f_y: f64,
    /// Whether `y` replaced `x`.
    pub accepted: Option<bool>,
}

impl TraceRecord {
    /// A record with every field unset.
    pub fn unset() -> Self {
        Self {
            temperature: f64::NAN,
            mutation_size: f64::NAN,
            x: None,
            f_x: f64::NAN,
            y: None,
            f_y: f64::NAN,
            accepted: None,
        }
    }

    /// Whether this step was recorded.
    pub fn is_set(&self) -> bool {
        self.accepted.is_some()
    }
}

impl Default for TraceRecord {
    fn default() -> Self {
        Self::unset()
    }
}

/// Step records indexed by evaluation count.
///
/// Preallocated to the evaluation budget; steps that were never recorded
/// stay [`TraceRecord::unset`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    records: Vec<TraceRecord>,
}

impl Trace {
    /// Creates a trace with `len` unset records.
    pub fn new(len: usize) -> Self {
        Self {
            records: vec![TraceRecord::unset(); len],
        }
    }

    /// Stores `record` at step `k`, growing the log if needed.
    pub fn record(&mut self, k: usize, record: TraceRecord) {
        if k >= self.records.len() {
            self.records.resize(k + 1, TraceRecord::unset());
        }
        self.records[k] = record;
    }

    /// Record at step `k`.
    pub fn get(&self, k: usize) -> Option<&TraceRecord> {
        self.records.get(k)
    }

    /// Number of slots, recorded or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log has no slots.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All slots in step order.
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Recorded steps only, with their step index.
    pub fn recorded(&self) -> impl Iterator<Item = (usize, &TraceRecord)> + '_ {
        self.records.iter().enumerate().filter(|(_, r)| r.is_set())
    }
}
