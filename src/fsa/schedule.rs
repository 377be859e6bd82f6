//! Cooling schedule and acceptance rule.

use std::f64::consts::PI;

/// Temperature at step `k`.
///
/// An infinite `t0` stays infinite at every step.
pub fn temperature(t0: f64, n0: f64, alpha: f64, k: usize) -> f64 {
    if t0.is_infinite() {
        return t0;
    }
    let q = k as f64 / n0;
    if alpha > 0.0 {
        t0 / (1.0 + q.powf(alpha))
    } else {
        t0 * (-q.powf(-alpha)).exp()
    }
}

/// Probability of moving from value `f_x` to `f_y` at temperature `t`.
///
/// `1/2 + arctan((f_x - f_y) / t) / pi`: exactly 1/2 for equal values at
/// any temperature, tending to 1 for improvements and 0 for
/// deteriorations as `t -> 0`.
pub fn acceptance_probability(f_x: f64, f_y: f64, t: f64) -> f64 {
    if f_x == f_y {
        return 0.5;
    }
    let s = (f_x - f_y) / t;
    0.5 + s.atan() / PI
}
