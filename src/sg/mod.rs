//! Shoot & Go (iterated steepest descent).
//!
//! Alternates a uniformly random "shot" with a bounded steepest-descent
//! "go" over the distance-1 neighborhood, restarting after every descent.
//!
//! - `hmax = 0`: pure random shooting, the neighborhood is never queried.
//! - `hmax = None`: every descent runs to a local optimum.

mod config;
mod runner;

pub use config::SgConfig;
pub use runner::SgRunner;
