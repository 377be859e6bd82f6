//! Discrete Cauchy mutation with boundary correction.
//!
//! Shared by Fast Simulated Annealing and the Genetic Optimizer. Each
//! coordinate is shifted by `r * tan(pi * (u - 1/2))` with `u ~ U[0, 1)`,
//! brought back into `[a_i, b_i]` by a [`Correction`], then rounded to
//! the nearest integer.
//!
//! # Corrections
//!
//! For the domain `a = (3, 3)`, `b = (9, 8)` and the out-of-domain
//! candidate `(5, 2)`:
//!
//! | Correction | Result |
//! |------------|--------|
//! | `Clip`     | (5, 3) |
//! | `Periodic` | (5, 7) |
//! | `Mirror`   | (5, 4) |

use crate::objfun::Point;
use rand::Rng;
use std::f64::consts::PI;

/// How an out-of-domain coordinate is brought back into `[a, b]`.
///
/// In-domain coordinates are never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Correction {
    /// Cut off at the nearest edge.
    #[default]
    Clip,

    /// Read from the periodic extension of the domain (period `b - a`).
    Periodic,

    /// Reflect back into the domain at the crossed edge.
    Mirror,
}

impl Correction {
    /// Corrects a single coordinate.
    pub fn apply(self, v: f64, a: f64, b: f64) -> f64 {
        if (a..=b).contains(&v) {
            return v;
        }
        let width = b - a;
        match self {
            Correction::Clip => v.clamp(a, b),
            Correction::Periodic => {
                if width <= 0.0 {
                    a
                } else {
                    a + (v - a).rem_euclid(width)
                }
            }
            Correction::Mirror => {
                if width <= 0.0 {
                    a
                } else {
                    let t = (v - a).rem_euclid(2.0 * width);
                    a + if t > width { 2.0 * width - t } else { t }
                }
            }
        }
    }
}

/// Mutates `x` with discrete Cauchy noise of radius `r`.
///
/// Returns a fresh point; `x` is left untouched.
///
/// # Panics
/// Panics if `x`, `a` and `b` differ in length.
pub fn cauchy_mutation<R: Rng>(
    x: &[i64],
    a: &[i64],
    b: &[i64],
    r: f64,
    correction: Correction,
    rng: &mut R,
) -> Point {
    assert!(
        x.len() == a.len() && x.len() == b.len(),
        "point and bounds must have equal length"
    );
    x.iter()
        .zip(a.iter().zip(b))
        .map(|(&xi, (&ai, &bi))| {
            let u: f64 = rng.random();
            let shifted = xi as f64 + r * (PI * (u - 0.5)).tan();
            let corrected = correction.apply(shifted, ai as f64, bi as f64);
            corrected.round_ties_even() as i64
        })
        .collect()
}

/// Euclidean norm of `x - y`.
pub fn mutation_size(x: &[i64], y: &[i64]) -> f64 {
    x.iter()
        .zip(y)
        .map(|(&xi, &yi)| ((xi - yi) as f64).powi(2))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn correct(c: Correction, v: [f64; 2]) -> [f64; 2] {
        [c.apply(v[0], 3.0, 9.0), c.apply(v[1], 3.0, 8.0)]
    }

    #[test]
    fn test_correction_examples() {
        assert_eq!(correct(Correction::Clip, [5.0, 2.0]), [5.0, 3.0]);
        assert_eq!(correct(Correction::Periodic, [5.0, 2.0]), [5.0, 7.0]);
        assert_eq!(correct(Correction::Mirror, [5.0, 2.0]), [5.0, 4.0]);
    }

    #[test]
    fn test_correction_upper_edge() {
        assert_eq!(Correction::Clip.apply(11.0, 3.0, 8.0), 8.0);
        assert_eq!(Correction::Periodic.apply(11.0, 3.0, 8.0), 6.0);
        assert_eq!(Correction::Mirror.apply(11.0, 3.0, 8.0), 5.0);
    }

    #[test]
    fn test_in_domain_untouched() {
        for c in [Correction::Clip, Correction::Periodic, Correction::Mirror] {
            assert_eq!(c.apply(3.0, 3.0, 8.0), 3.0);
            assert_eq!(c.apply(8.0, 3.0, 8.0), 8.0);
            assert_eq!(c.apply(5.5, 3.0, 8.0), 5.5);
        }
    }

    #[test]
    fn test_degenerate_domain() {
        for c in [Correction::Clip, Correction::Periodic, Correction::Mirror] {
            assert_eq!(c.apply(-4.0, 0.0, 0.0), 0.0);
            assert_eq!(c.apply(4.0, 0.0, 0.0), 0.0);
        }
    }

    #[test]
    fn test_far_mirror_stays_in_domain() {
        let v = Correction::Mirror.apply(1234.5, 0.0, 10.0);
        assert!((0.0..=10.0).contains(&v));
        let v = Correction::Periodic.apply(-1e9, 0.0, 7.0);
        assert!((0.0..=7.0).contains(&v));
    }

    #[test]
    fn test_mutation_stays_in_bounds() {
        let a = vec![0, -5, 10];
        let b = vec![1, 5, 20];
        let x = vec![0, 0, 15];
        let mut rng = create_rng(42);
        for c in [Correction::Clip, Correction::Periodic, Correction::Mirror] {
            for _ in 0..2000 {
                let y = cauchy_mutation(&x, &a, &b, 3.0, c, &mut rng);
                for i in 0..3 {
                    assert!(a[i] <= y[i] && y[i] <= b[i], "{c:?}: {y:?}");
                }
            }
        }
    }

    #[test]
    fn test_small_radius_mostly_identity() {
        let a = vec![0; 4];
        let b = vec![100; 4];
        let x = vec![50; 4];
        let mut rng = create_rng(7);
        let unchanged = (0..1000)
            .filter(|_| cauchy_mutation(&x, &a, &b, 0.01, Correction::Clip, &mut rng) == x)
            .count();
        assert!(unchanged > 900, "got {unchanged}");
    }

    #[test]
    fn test_mutation_size() {
        assert_eq!(mutation_size(&[0, 0], &[3, 4]), 5.0);
        assert_eq!(mutation_size(&[2], &[2]), 0.0);
    }
}
