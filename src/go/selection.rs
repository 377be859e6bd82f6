//! Rank-based selection with an exponential rank distribution.
//!
//! The `R`-th best member of a sorted pool is selected with
//! `R = ceil(-T * ln(U))`, `U ~ U[0, 1)`, clamped to `[1, size]`. The
//! temperature `T` controls selection pressure: near zero it always picks
//! the best, large values push most draws to the clamped worst rank.

use rand::Rng;

/// Draws a 0-based index into a pool of `size` members sorted best-first.
///
/// # Panics
/// Panics if `size` is zero.
pub fn rank_select<R: Rng>(temperature: f64, size: usize, rng: &mut R) -> usize {
    assert!(size > 0, "cannot select from an empty pool");
    let u: f64 = rng.random();
    let rank = (-temperature * u.ln()).ceil();
    // u = 0 yields +inf, which clamps to the pool size like any large rank
    let rank = if rank.is_nan() || rank < 1.0 {
        1
    } else if rank >= size as f64 {
        size
    } else {
        rank as usize
    };
    rank - 1
}
