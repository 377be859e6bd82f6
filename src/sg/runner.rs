//! Shoot & Go execution loop.

use super::config::SgConfig;
use crate::error::HeurError;
use crate::objfun::{ObjFun, Point};
use crate::random::rng_from_seed;
use crate::session::{SearchReport, Session, StopReason};
use rand::Rng;
use std::ops::ControlFlow;

/// Executes Shoot & Go (random-restart steepest descent).
///
/// # Usage
///
/// ```
/// use u_heurbench::objfun::AirShip;
/// use u_heurbench::sg::{SgConfig, SgRunner};
///
/// let config = SgConfig::default()
///     .with_max_evaluations(1000)
///     .with_unbounded_descent()
///     .with_seed(42);
/// let report = SgRunner::run(&AirShip::new(), &config).unwrap();
/// assert!(report.best_y <= -50.0);
/// ```
pub struct SgRunner;

impl SgRunner {
    /// Runs Shoot & Go, seeding the RNG from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the objective
    /// rejects a distance-1 neighborhood request.
    pub fn run<F: ObjFun>(of: &F, config: &SgConfig) -> Result<SearchReport, HeurError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(of, config, &mut rng)
    }

    /// Runs Shoot & Go with a caller-supplied RNG.
    pub fn run_with_rng<F: ObjFun, R: Rng>(
        of: &F,
        config: &SgConfig,
        rng: &mut R,
    ) -> Result<SearchReport, HeurError> {
        config.validate()?;
        log::debug!(
            "shoot & go: budget {}, hmax {:?}",
            config.max_evaluations,
            config.hmax
        );

        let mut session = Session::new(of, config.max_evaluations);
        let stop = loop {
            // Shoot...
            let x = of.generate_point(rng);
            let y = match session.evaluate(&x) {
                ControlFlow::Continue(y) => y,
                ControlFlow::Break(stop) => break stop,
            };

            // ...and go
            if config.hmax != Some(0) {
                if let ControlFlow::Break(stop) =
                    steepest_descent(&mut session, x, y, config.hmax)?
                {
                    break stop;
                }
            }
        };

        Ok(session.report_end(stop))
    }
}

/// Steepest descent from `x` (already evaluated to `y`).
///
/// Moves to the best strictly improving distance-1 neighbor until none
/// improves or `hmax` neighbor evaluations have been spent.
fn steepest_descent<F: ObjFun>(
    session: &mut Session<'_, F>,
    x: Point,
    y: f64,
    hmax: Option<usize>,
) -> Result<ControlFlow<StopReason>, HeurError> {
    let of = session.objective();
    let within_depth = |h: usize| hmax.is_none_or(|max| h < max);

    let mut best_x = x;
    let mut best_y = y;
    let mut h = 0usize;
    let mut improved = true;

    while improved && within_depth(h) {
        improved = false;
        let neighborhood = of.get_neighborhood(&best_x, 1)?;
        for xn in neighborhood {
            let yn = match session.evaluate(&xn) {
                ControlFlow::Continue(yn) => yn,
                ControlFlow::Break(stop) => return Ok(ControlFlow::Break(stop)),
            };
            h += 1;
            if yn < best_y {
                best_y = yn;
                best_x = xn;
                improved = true;
            }
            if !within_depth(h) {
                break;
            }
        }
    }

    Ok(ControlFlow::Continue(()))
}
