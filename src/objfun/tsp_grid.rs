//! Grid TSP with order-index encoding.
//!
//! Cities sit on an `A x B` integer grid. A tour is encoded by a vector of
//! `n - 1` order indices, where entry `k` ranges over `0..=n-2-k` and picks
//! the next city among those not visited yet. City 0 always starts the
//! tour. This encoding makes every vector in the box a valid tour, so the
//! generic mutation and neighborhood machinery applies unchanged.

use super::types::{ObjFun, Point};
use crate::error::HeurError;
use rand::Rng;
use std::f64::consts::SQRT_2;

/// Closed-tour TSP over grid-placed cities.
///
/// The target is the optimal tour length: `A * B` when the city count is
/// even, and `A * B + sqrt(2) - 1` for odd x odd grids, where one
/// diagonal edge is unavoidable.
///
/// # Examples
///
/// ```
/// use u_heurbench::objfun::{ObjFun, TspGrid};
///
/// let tsp = TspGrid::new(3, 2).unwrap();
/// assert_eq!(tsp.decode(&[1, 2, 2, 1, 0]), vec![0, 2, 4, 5, 3, 1]);
/// assert!((tsp.evaluate(&[1, 2, 2, 1, 0]) - tsp.fstar()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct TspGrid {
    width: usize,
    height: usize,
    dist: Vec<Vec<f64>>,
    fstar: f64,
    a: Vec<i64>,
    b: Vec<i64>,
}

impl TspGrid {
    /// Creates a grid TSP with `width * height` cities.
    ///
    /// City `i * height + j` sits at `(i, j)`.
    ///
    /// # Errors
    ///
    /// Returns [`HeurError::InvalidObjective`] if either side is shorter
    /// than 2; the closed-form optimum does not hold for a single row.
    pub fn new(width: usize, height: usize) -> Result<Self, HeurError> {
        if width < 2 || height < 2 {
            return Err(HeurError::InvalidObjective(format!(
                "grid {width}x{height} needs both sides of at least 2"
            )));
        }
        let n = width * height;

        let coords: Vec<(f64, f64)> = (0..width)
            .flat_map(|i| (0..height).map(move |j| (i as f64, j as f64)))
            .collect();
        let dist = coords
            .iter()
            .map(|&(xi, yi)| {
                coords
                    .iter()
                    .map(|&(xj, yj)| ((xi - xj).powi(2) + (yi - yj).powi(2)).sqrt())
                    .collect()
            })
            .collect();

        // An odd city count (both sides odd) forces one diagonal edge.
        let fstar = n as f64 + (n % 2) as f64 * (SQRT_2 - 1.0);

        let a = vec![0; n - 1];
        let b = (0..n - 1).map(|k| (n - 2 - k) as i64).collect();

        Ok(Self {
            width,
            height,
            dist,
            fstar,
            a,
            b,
        })
    }

    /// Number of cities.
    pub fn cities(&self) -> usize {
        self.width * self.height
    }

    /// Grid dimensions `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Euclidean distance between two cities.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.dist[from][to]
    }

    /// Reconstructs the visiting order from an order-index vector.
    ///
    /// # Panics
    /// Panics if an entry exceeds its upper bound.
    pub fn decode(&self, x: &[i64]) -> Vec<usize> {
        let n = self.cities();
        let mut remaining: Vec<usize> = (1..n).collect();
        let mut tour = Vec::with_capacity(n);
        tour.push(0);
        for &ix in x {
            tour.push(remaining.remove(ix as usize));
        }
        tour
    }

    /// Length of a closed tour given as an explicit city order.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n)
            .map(|i| self.dist[tour[(i + n - 1) % n]][tour[i]])
            .sum()
    }
}

impl ObjFun for TspGrid {
    fn fstar(&self) -> f64 {
        self.fstar
    }

    fn bounds(&self) -> (&[i64], &[i64]) {
        (&self.a, &self.b)
    }

    fn generate_point<R: Rng>(&self, rng: &mut R) -> Point {
        self.b.iter().map(|&bk| rng.random_range(0..=bk)).collect()
    }

    /// Points differing by +-1 in exactly one coordinate, staying in range.
    fn get_neighborhood(&self, x: &[i64], d: usize) -> Result<Vec<Point>, HeurError> {
        if d != 1 {
            return Err(HeurError::UnsupportedDistance {
                distance: d,
                supported: "distance 1 only",
            });
        }
        let mut nb = Vec::with_capacity(2 * x.len());
        for (i, &xi) in x.iter().enumerate() {
            if xi > self.a[i] {
                let mut lower = x.to_vec();
                lower[i] = xi - 1;
                nb.push(lower);
            }
            if xi < self.b[i] {
                let mut upper = x.to_vec();
                upper[i] = xi + 1;
                nb.push(upper);
            }
        }
        Ok(nb)
    }

    fn evaluate(&self, x: &[i64]) -> f64 {
        self.tour_length(&self.decode(x))
    }
}
