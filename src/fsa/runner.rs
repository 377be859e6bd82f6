//! FSA execution loop.

use super::config::FsaConfig;
use super::schedule::{acceptance_probability, temperature};
use crate::error::HeurError;
use crate::mutation::{cauchy_mutation, mutation_size};
use crate::objfun::ObjFun;
use crate::random::rng_from_seed;
use crate::session::{SearchReport, Session, StopReason, TraceRecord};
use rand::Rng;
use std::convert::Infallible;
use std::ops::ControlFlow;

/// Executes Fast Simulated Annealing.
///
/// # Usage
///
/// ```
/// use u_heurbench::fsa::{FsaConfig, FsaRunner};
/// use u_heurbench::objfun::TspGrid;
///
/// let tsp = TspGrid::new(3, 2).unwrap();
/// let config = FsaConfig::default().with_max_evaluations(100).with_seed(1);
/// let report = FsaRunner::run(&tsp, &config).unwrap();
/// assert!(report.evaluations <= 100);
/// ```
pub struct FsaRunner;

impl FsaRunner {
    /// Runs FSA, seeding the RNG from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn run<F: ObjFun>(of: &F, config: &FsaConfig) -> Result<SearchReport, HeurError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(of, config, &mut rng)
    }

    /// Runs FSA with a caller-supplied RNG.
    pub fn run_with_rng<F: ObjFun, R: Rng>(
        of: &F,
        config: &FsaConfig,
        rng: &mut R,
    ) -> Result<SearchReport, HeurError> {
        config.validate()?;
        log::debug!(
            "fsa: budget {}, T0 {}, n0 {}, alpha {}, r {}",
            config.max_evaluations,
            config.initial_temperature,
            config.n0,
            config.alpha,
            config.radius
        );

        let mut session = Session::new(of, config.max_evaluations);
        if config.trace {
            session = session.with_trace();
        }

        let stop = match anneal(&mut session, config, rng) {
            ControlFlow::Break(stop) => stop,
            ControlFlow::Continue(never) => match never {},
        };
        Ok(session.report_end(stop))
    }
}

/// The annealing trajectory; only ever ends through a stop condition.
fn anneal<F: ObjFun, R: Rng>(
    session: &mut Session<'_, F>,
    config: &FsaConfig,
    rng: &mut R,
) -> ControlFlow<StopReason, Infallible> {
    let of = session.objective();
    let (a, b) = of.bounds();

    let mut x = of.generate_point(rng);
    let mut f_x = session.evaluate(&x)?;

    loop {
        let k = session.neval();
        let y = cauchy_mutation(&x, a, b, config.radius, config.correction, rng);
        let f_y = session.evaluate(&y)?;

        let t = temperature(config.initial_temperature, config.n0, config.alpha, k);
        let accepted = rng.random::<f64>() < acceptance_probability(f_x, f_y, t);

        if let Some(trace) = session.trace_mut() {
            trace.record(
                k,
                TraceRecord {
                    temperature: t,
                    mutation_size: mutation_size(&x, &y),
                    x: Some(x.clone()),
                    f_x,
                    y: Some(y.clone()),
                    f_y,
                    accepted: Some(accepted),
                },
            );
        }

        if accepted {
            x = y;
            f_x = f_y;
        }
    }
}
