//! Peak search execution loop.

use super::config::PeakSearchConfig;
use crate::error::HeurError;
use crate::objfun::Terrain;
use crate::random::rng_from_seed;
use rand::Rng;
use std::convert::Infallible;
use std::ops::ControlFlow;

/// Why a peak search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExitReason {
    /// A probe hit the highest point of the terrain.
    TopPeakFound,
    /// A probe was requested after the budget was spent.
    AllTroopsUsed,
}

/// Result of a peak search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakReport {
    /// Highest probed height.
    pub best_peak_y: f64,
    /// Where it was probed.
    pub best_peak_x: Option<i64>,
    /// Probes spent.
    pub troops_used: usize,
    /// Why the search ended.
    pub exit_reason: ExitReason,
}

impl PeakReport {
    /// Probes spent to reach the top peak, or `None` if it was missed.
    pub fn troops_to_top(&self) -> Option<usize> {
        (self.exit_reason == ExitReason::TopPeakFound).then_some(self.troops_used)
    }
}

/// The probe budget and running best.
struct Troops<'a> {
    terrain: &'a Terrain,
    top_peak_y: f64,
    used: usize,
    max: usize,
    best_x: Option<i64>,
    best_y: f64,
}

impl Troops<'_> {
    fn probe(&mut self, x: i64) -> ControlFlow<ExitReason, f64> {
        if self.used >= self.max {
            return ControlFlow::Break(ExitReason::AllTroopsUsed);
        }
        self.used += 1;
        let y = self.terrain.height(x);
        if y > self.best_y {
            self.best_y = y;
            self.best_x = Some(x);
        }
        if y == self.top_peak_y {
            return ControlFlow::Break(ExitReason::TopPeakFound);
        }
        ControlFlow::Continue(y)
    }
}

/// Random probing with short greedy climbs toward the higher side.
///
/// Not built on [`crate::session::Session`]: the budget counts terrain
/// probes and the goal is maximization of raw height.
///
/// # Usage
///
/// ```
/// use u_heurbench::airship::{ExitReason, PeakSearch, PeakSearchConfig};
/// use u_heurbench::objfun::Terrain;
///
/// let terrain = Terrain::air_ship();
/// let config = PeakSearchConfig::default().with_troops_max(100_000).with_seed(1);
/// let report = PeakSearch::run(&terrain, &config).unwrap();
/// assert_eq!(report.exit_reason, ExitReason::TopPeakFound);
/// assert_eq!(report.best_peak_x, Some(50));
/// ```
pub struct PeakSearch;

impl PeakSearch {
    /// Runs the peak search, seeding the RNG from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn run(terrain: &Terrain, config: &PeakSearchConfig) -> Result<PeakReport, HeurError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(terrain, config, &mut rng)
    }

    /// Runs the peak search with a caller-supplied RNG.
    pub fn run_with_rng<R: Rng>(
        terrain: &Terrain,
        config: &PeakSearchConfig,
        rng: &mut R,
    ) -> Result<PeakReport, HeurError> {
        config.validate()?;

        let mut troops = Troops {
            terrain,
            top_peak_y: terrain.max_height(),
            used: 0,
            max: config.troops_max,
            best_x: None,
            best_y: f64::NEG_INFINITY,
        };
        let exit_reason = match find_peak(&mut troops, config.climb_max, rng) {
            ControlFlow::Break(reason) => reason,
            ControlFlow::Continue(never) => match never {},
        };
        log::debug!(
            "peak search ended ({exit_reason:?}) after {} troops, best {} at {:?}",
            troops.used,
            troops.best_y,
            troops.best_x
        );

        Ok(PeakReport {
            best_peak_y: troops.best_y,
            best_peak_x: troops.best_x,
            troops_used: troops.used,
            exit_reason,
        })
    }
}

fn find_peak<R: Rng>(
    troops: &mut Troops<'_>,
    climb_max: usize,
    rng: &mut R,
) -> ControlFlow<ExitReason, Infallible> {
    let (lo, hi) = (troops.terrain.min_x(), troops.terrain.max_x());
    loop {
        let mut x = rng.random_range(lo..=hi);
        let mut y = troops.probe(x)?;

        let mut used = 0;
        let mut climbing = true;
        while climbing && used < climb_max {
            let mut y_l = f64::NEG_INFINITY;
            let mut y_r = f64::NEG_INFINITY;
            if x > lo {
                y_l = troops.probe(x - 1)?;
                used += 1;
            }
            if x < hi && used < climb_max {
                y_r = troops.probe(x + 1)?;
                used += 1;
            }
            let higher = y_l.max(y_r);
            if higher > y {
                x = if y_l > y_r { x - 1 } else { x + 1 };
                y = higher;
            } else {
                climbing = false;
            }
        }
    }
}
