//! Recombination operators.

use crate::objfun::Point;

/// Multi-point crossover with equal-sized blocks.
///
/// Splits the chromosome into `points + 1` contiguous blocks of
/// `ceil(n / (points + 1))` genes (the last may be shorter) and takes them
/// alternately from `x` and `y`, starting with `x`.
///
/// # Examples
///
/// ```
/// use u_heurbench::go::crossover_multi;
///
/// let x = [1, 1, 1, 1, 1, 1];
/// let y = [0, 0, 0, 0, 0, 0];
/// assert_eq!(crossover_multi(&x, &y, 1), vec![1, 1, 1, 0, 0, 0]);
/// assert_eq!(crossover_multi(&x, &y, 2), vec![1, 1, 0, 0, 1, 1]);
/// ```
///
/// # Panics
/// Panics if the parents differ in length.
pub fn crossover_multi(x: &[i64], y: &[i64], points: usize) -> Point {
    assert_eq!(x.len(), y.len(), "parents must have equal length");
    let width = x.len().div_ceil(points + 1);
    if width == 0 {
        return Vec::new();
    }
    x.iter()
        .zip(y)
        .enumerate()
        .map(|(i, (&xi, &yi))| if (i / width) % 2 == 0 { xi } else { yi })
        .collect()
}
