//! Core trait for objective functions.

use crate::error::HeurError;
use rand::Rng;

/// A candidate point: a fixed-length integer vector.
///
/// Scalar domains use a vector of length 1. Points are always passed by
/// reference into objective functions and cloned when a strategy keeps
/// them, never shared mutably.
pub type Point = Vec<i64>;

/// Defines a search space and the function to minimize over it.
///
/// Every search strategy in this crate talks to its problem through this
/// trait only. Implementations must be pure: `evaluate` depends on its
/// input and on constants fixed at construction.
///
/// # Minimization
///
/// All problems are minimized. A search stops successfully as soon as an
/// evaluated value is `<= fstar()`.
///
/// # Examples
///
/// ```
/// use u_heurbench::objfun::{ObjFun, Zebra3};
/// use u_heurbench::random::create_rng;
///
/// let zebra = Zebra3::new(4).unwrap();
/// let mut rng = create_rng(42);
/// let x = zebra.generate_point(&mut rng);
/// assert_eq!(x.len(), 12);
/// assert_eq!(zebra.get_neighborhood(&x, 1).unwrap().len(), 12);
/// ```
pub trait ObjFun: Send + Sync {
    /// Target (optimal) value.
    fn fstar(&self) -> f64;

    /// Per-dimension lower and upper bounds `(a, b)`, both inclusive.
    fn bounds(&self) -> (&[i64], &[i64]);

    /// Number of coordinates in a point.
    fn dim(&self) -> usize {
        self.bounds().0.len()
    }

    /// Draws a uniformly random point inside the domain.
    fn generate_point<R: Rng>(&self, rng: &mut R) -> Point;

    /// Returns every point at structural distance exactly `d` from `x`.
    ///
    /// # Errors
    ///
    /// Returns [`HeurError::UnsupportedDistance`] when the domain has no
    /// topology defined for `d`.
    fn get_neighborhood(&self, x: &[i64], d: usize) -> Result<Vec<Point>, HeurError>;

    /// Evaluates `x`. Lower is better.
    fn evaluate(&self, x: &[i64]) -> f64;
}
