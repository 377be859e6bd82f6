//! Heuristic search strategies and benchmark objectives for comparing
//! stochastic optimizers.
//!
//! Provides a shared evaluation contract and four strategies that run
//! against it:
//!
//! - **Shoot & Go (SG)**: random restarts followed by bounded steepest
//!   descent over the distance-1 neighborhood.
//! - **Fast Simulated Annealing (FSA)**: a single trajectory with discrete
//!   Cauchy mutation and arctangent acceptance.
//! - **Genetic Optimizer (GO)**: exponential rank selection, multi-point
//!   crossover, Cauchy mutation, distinct survivor selection.
//! - **Air Ship peak search**: a troop-budgeted climber over a terrain.
//!
//! Objective functions ([`objfun`]) cover a scalar integer terrain, a
//! block-structured binary vector ([`objfun::Zebra3`]) and a grid TSP in
//! order-index encoding ([`objfun::TspGrid`]). [`stats`] turns repeated
//! runs into reliability, mean evaluation count and the Feoktistov
//! criterion.
//!
//! # Architecture
//!
//! Every strategy wraps its evaluations in a [`session::Session`], which
//! counts them, tracks the incumbent best and signals a stop through
//! [`std::ops::ControlFlow`]. Randomness is always an explicit `&mut R`
//! handle, so runs are reproducible from a seed and independent runs can
//! execute in parallel.

pub mod airship;
pub mod error;
pub mod fsa;
pub mod go;
pub mod mutation;
pub mod objfun;
pub mod random;
pub mod session;
pub mod sg;
pub mod stats;
