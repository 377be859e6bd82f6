//! Binary block-reward domain ("Zebra-3").
//!
//! A binary vector of `3d` bits split into `d` consecutive blocks of three.
//! Odd blocks (1-based) reward few ones, even blocks reward many, so the
//! optimum alternates `000 111 000 111 ...` and scores exactly 0.

use super::types::{ObjFun, Point};
use crate::error::HeurError;
use rand::Rng;

const BLOCK: usize = 3;

/// Reward by bit count for odd (1-based) blocks.
const ODD_REWARD: [f64; 4] = [1.0, 0.3, 0.6, 0.9];
/// Reward by bit count for even (1-based) blocks.
const EVEN_REWARD: [f64; 4] = [0.9, 0.6, 0.3, 1.0];

/// Zebra-3 objective over `d` blocks.
///
/// # Examples
///
/// ```
/// use u_heurbench::objfun::{ObjFun, Zebra3};
///
/// let zebra = Zebra3::new(2).unwrap();
/// assert_eq!(zebra.evaluate(&[0, 0, 0, 1, 1, 1]), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Zebra3 {
    blocks: usize,
    a: Vec<i64>,
    b: Vec<i64>,
}

impl Zebra3 {
    /// Creates a Zebra-3 problem with `blocks` blocks (`3 * blocks` bits).
    ///
    /// # Errors
    ///
    /// Returns [`HeurError::InvalidObjective`] if `blocks` is zero.
    pub fn new(blocks: usize) -> Result<Self, HeurError> {
        if blocks == 0 {
            return Err(HeurError::InvalidObjective(
                "zebra3 needs at least one block".into(),
            ));
        }
        let n = blocks * BLOCK;
        Ok(Self {
            blocks,
            a: vec![0; n],
            b: vec![1; n],
        })
    }

    /// Number of blocks.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// The optimal point: odd blocks all zero, even blocks all one.
    pub fn optimum(&self) -> Point {
        (0..self.blocks)
            .flat_map(|i| {
                let bit = if i % 2 == 0 { 0 } else { 1 };
                [bit; BLOCK]
            })
            .collect()
    }
}

impl ObjFun for Zebra3 {
    fn fstar(&self) -> f64 {
        0.0
    }

    fn bounds(&self) -> (&[i64], &[i64]) {
        (&self.a, &self.b)
    }

    fn generate_point<R: Rng>(&self, rng: &mut R) -> Point {
        (0..self.a.len()).map(|_| rng.random_range(0..=1)).collect()
    }

    /// All points at Hamming distance 1, flipping bit `i` for `i = 0..n`.
    fn get_neighborhood(&self, x: &[i64], d: usize) -> Result<Vec<Point>, HeurError> {
        if d != 1 {
            return Err(HeurError::UnsupportedDistance {
                distance: d,
                supported: "Hamming distance 1 only",
            });
        }
        Ok((0..x.len())
            .map(|i| {
                let mut xn = x.to_vec();
                xn[i] = if xn[i] == 1 { 0 } else { 1 };
                xn
            })
            .collect())
    }

    fn evaluate(&self, x: &[i64]) -> f64 {
        debug_assert_eq!(x.len(), self.a.len(), "point has wrong length");
        let reward: f64 = x
            .chunks(BLOCK)
            .enumerate()
            .map(|(i, block)| {
                let ones = block.iter().filter(|&&bit| bit == 1).count();
                // i is 0-based, so an even i is an odd 1-based block
                if i % 2 == 0 {
                    ODD_REWARD[ones]
                } else {
                    EVEN_REWARD[ones]
                }
            })
            .sum();
        self.blocks as f64 - reward
    }
}
