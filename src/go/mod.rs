//! Genetic Optimizer (GO).
//!
//! A population method built on the shared evaluation contract: exponential
//! rank selection, equal-block multi-point crossover and the discrete
//! Cauchy mutation also used by FSA. Each generation breeds a working pool
//! of `m > n` offspring and keeps `n` distinct members of it.
//!
//! # Key Types
//!
//! - [`GoConfig`]: population/pool sizes, selection temperatures, operators
//! - [`GoRunner`]: executes the generational loop
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod operators;
mod runner;
mod selection;

pub use config::GoConfig;
pub use operators::crossover_multi;
pub use runner::{GoRunner, Member};
pub use selection::rank_select;
