//! Standalone Air Ship peak search.
//!
//! Hunts for the highest point of a [`Terrain`](crate::objfun::Terrain)
//! with a fixed number of probes ("troops"). Each round probes a random
//! coordinate, then climbs toward the higher neighbour for at most
//! `climb_max` further probes. Ties between the two sides go right.
//!
//! The search ends as soon as a probe hits the terrain's maximum height
//! ([`ExitReason::TopPeakFound`]) or a probe is requested with no troops
//! left ([`ExitReason::AllTroopsUsed`]).

mod config;
mod runner;

pub use config::PeakSearchConfig;
pub use runner::{ExitReason, PeakReport, PeakSearch};
