//! Evaluation/stopping contract.
//!
//! A [`Session`] wraps every objective evaluation of one search run. It
//! counts evaluations, keeps the incumbent best, and turns "target
//! reached" and "budget exhausted" into a
//! [`ControlFlow::Break`](std::ops::ControlFlow::Break) that strategies
//! propagate to the top of their search loop. Stop conditions never
//! escape a runner: they become a [`SearchReport`].

mod contract;
mod report;
mod trace;

pub use contract::Session;
pub use report::{SearchReport, StopReason};
pub use trace::{Trace, TraceRecord};
