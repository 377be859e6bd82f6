//! Fast Simulated Annealing (FSA).
//!
//! A single trajectory driven by discrete Cauchy mutation and a smooth
//! arctangent acceptance rule. Unlike Metropolis acceptance, improving
//! moves are not always taken: the acceptance probability is
//! `1/2 + arctan((f_x - f_y) / T) / pi`, which approaches a greedy rule
//! only as the temperature falls.
//!
//! # References
//!
//! - Szu & Hartley (1987), "Fast simulated annealing"

mod config;
mod runner;
mod schedule;

pub use config::FsaConfig;
pub use runner::FsaRunner;
pub use schedule::{acceptance_probability, temperature};
