//! The evaluation/stopping contract shared by all strategies.

use super::report::{SearchReport, StopReason};
use super::trace::Trace;
use crate::objfun::{ObjFun, Point};
use std::ops::ControlFlow;

/// State of one search invocation.
///
/// Wraps every objective evaluation: counts evaluations, keeps a copy of
/// the incumbent best, and signals a stop once the target is reached or
/// the budget is spent. A session is created per run and consumed by
/// [`Session::report_end`].
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use u_heurbench::objfun::Zebra3;
/// use u_heurbench::session::{Session, StopReason};
///
/// let zebra = Zebra3::new(2).unwrap();
/// let mut session = Session::new(&zebra, 10);
/// assert!(session.evaluate(&[1, 1, 1, 0, 0, 0]).is_continue());
/// assert_eq!(
///     session.evaluate(&zebra.optimum()),
///     ControlFlow::Break(StopReason::TargetReached)
/// );
/// let report = session.report_end(StopReason::TargetReached);
/// assert_eq!(report.neval, Some(2));
/// ```
#[derive(Debug)]
pub struct Session<'a, F: ObjFun> {
    of: &'a F,
    max_evaluations: usize,
    fstar: f64,
    neval: usize,
    best_y: f64,
    best_x: Option<Point>,
    trace: Option<Trace>,
}

impl<'a, F: ObjFun> Session<'a, F> {
    /// Opens a session against `of` with a budget of `max_evaluations`.
    pub fn new(of: &'a F, max_evaluations: usize) -> Self {
        Self {
            of,
            max_evaluations,
            fstar: of.fstar(),
            neval: 0,
            best_y: f64::INFINITY,
            best_x: None,
            trace: None,
        }
    }

    /// Enables the step trace, preallocated to the budget.
    pub fn with_trace(mut self) -> Self {
        self.trace = Some(Trace::new(self.max_evaluations));
        self
    }

    /// The bound objective function.
    pub fn objective(&self) -> &'a F {
        self.of
    }

    /// Evaluations performed so far.
    pub fn neval(&self) -> usize {
        self.neval
    }

    /// Evaluation budget.
    pub fn max_evaluations(&self) -> usize {
        self.max_evaluations
    }

    /// Target value.
    pub fn fstar(&self) -> f64 {
        self.fstar
    }

    /// Best value so far (`+inf` before the first evaluation).
    pub fn best_y(&self) -> f64 {
        self.best_y
    }

    /// Best point so far.
    pub fn best_x(&self) -> Option<&[i64]> {
        self.best_x.as_deref()
    }

    /// Mutable access to the trace, if enabled.
    pub fn trace_mut(&mut self) -> Option<&mut Trace> {
        self.trace.as_mut()
    }

    /// Evaluates `x` under the contract.
    ///
    /// Returns `Continue(value)` on ordinary calls and `Break(reason)` when
    /// the call ends the session. The target check runs before the budget
    /// check, so a call that does both reports [`StopReason::TargetReached`].
    /// Once the budget is spent, further calls break without evaluating.
    pub fn evaluate(&mut self, x: &[i64]) -> ControlFlow<StopReason, f64> {
        if self.neval >= self.max_evaluations {
            return ControlFlow::Break(StopReason::BudgetExhausted);
        }

        let y = self.of.evaluate(x);
        self.neval += 1;

        if y < self.best_y {
            log::trace!("neval {}: new best {y}", self.neval);
            self.best_y = y;
            self.best_x = Some(x.to_vec());
        }

        if y <= self.fstar {
            return ControlFlow::Break(StopReason::TargetReached);
        }
        if self.neval == self.max_evaluations {
            return ControlFlow::Break(StopReason::BudgetExhausted);
        }
        ControlFlow::Continue(y)
    }

    /// Closes the session and builds its report.
    pub fn report_end(self, stop_reason: StopReason) -> SearchReport {
        let success = self.best_y <= self.fstar;
        log::debug!(
            "search ended ({stop_reason:?}) after {} evaluations, best {}",
            self.neval,
            self.best_y
        );
        SearchReport {
            best_y: self.best_y,
            best_x: self.best_x,
            neval: success.then_some(self.neval),
            evaluations: self.neval,
            stop_reason,
            trace: self.trace,
        }
    }
}
