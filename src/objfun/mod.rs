//! Objective functions.
//!
//! Every search strategy operates against the [`ObjFun`] trait, which
//! exposes the domain bounds, the target value, random point generation,
//! neighborhood enumeration and evaluation.
//!
//! # Variants
//!
//! - [`AirShip`]: scalar integer coordinate over a piecewise-linear
//!   [`Terrain`]; maximize height.
//! - [`Zebra3`]: binary vector with block-structured rewards.
//! - [`TspGrid`]: closed tour over grid-placed cities, order-index encoded.

mod terrain;
mod tsp_grid;
mod types;
mod zebra;

pub use terrain::{AirShip, Terrain};
pub use tsp_grid::TspGrid;
pub use types::{ObjFun, Point};
pub use zebra::Zebra3;
