//! Search outcome types.

use super::trace::Trace;
use crate::objfun::Point;

/// Why a search session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// An evaluated value was `<= fstar`.
    TargetReached,
    /// The evaluation budget was used up.
    BudgetExhausted,
}

/// Final report of a search run.
///
/// Success is decided by whether the target was ever met, not by which
/// stop condition fired: `neval` is `Some(count)` when `best_y <= fstar`
/// and `None` otherwise. Reliability over many runs is therefore the
/// fraction of reports with `neval.is_some()`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// Best (lowest) value evaluated.
    pub best_y: f64,

    /// Point that produced `best_y`; `None` only if nothing was evaluated.
    pub best_x: Option<Point>,

    /// Evaluations used to reach the target, or `None` on failure.
    pub neval: Option<usize>,

    /// Evaluations actually consumed, regardless of success.
    pub evaluations: usize,

    /// The stop condition that ended the session.
    pub stop_reason: StopReason,

    /// Per-step trace, when the strategy recorded one.
    pub trace: Option<Trace>,
}

impl SearchReport {
    /// Whether the target value was reached.
    pub fn is_success(&self) -> bool {
        self.neval.is_some()
    }

    /// `neval` as a float, with `f64::INFINITY` standing for failure.
    pub fn neval_or_inf(&self) -> f64 {
        self.neval.map_or(f64::INFINITY, |n| n as f64)
    }
}
