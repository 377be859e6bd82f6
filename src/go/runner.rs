//! Genetic Optimizer evolutionary loop.
//!
//! 1. Evaluate `n` random points and sort them best-first.
//! 2. Breed a working pool of `m` offspring: two rank-selected parents
//!    (`t_sel1`), multi-point crossover, Cauchy mutation, evaluation.
//! 3. Sort the pool and draw `n` distinct survivors by rank selection
//!    (`t_sel2`) from the members not yet taken.
//! 4. Sort the survivors and repeat from 2.

use super::config::GoConfig;
use super::operators::crossover_multi;
use super::selection::rank_select;
use crate::error::HeurError;
use crate::mutation::cauchy_mutation;
use crate::objfun::{ObjFun, Point};
use crate::random::rng_from_seed;
use crate::session::{SearchReport, Session, StopReason};
use rand::Rng;
use std::convert::Infallible;
use std::ops::ControlFlow;

/// An evaluated population member.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// The point.
    pub x: Point,
    /// Its objective value.
    pub fitness: f64,
}

/// Executes the Genetic Optimizer.
///
/// # Usage
///
/// ```
/// use u_heurbench::go::{GoConfig, GoRunner};
/// use u_heurbench::objfun::Zebra3;
///
/// let zebra = Zebra3::new(3).unwrap();
/// let config = GoConfig::default().with_max_evaluations(20_000).with_seed(42);
/// let report = GoRunner::run(&zebra, &config).unwrap();
/// assert!(report.is_success());
/// ```
pub struct GoRunner;

impl GoRunner {
    /// Runs the Genetic Optimizer, seeding the RNG from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`HeurError::Config`] before any evaluation if the
    /// configuration is invalid, in particular when `m <= n`.
    pub fn run<F: ObjFun>(of: &F, config: &GoConfig) -> Result<SearchReport, HeurError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(of, config, &mut rng)
    }

    /// Runs the Genetic Optimizer with a caller-supplied RNG.
    pub fn run_with_rng<F: ObjFun, R: Rng>(
        of: &F,
        config: &GoConfig,
        rng: &mut R,
    ) -> Result<SearchReport, HeurError> {
        config.validate()?;
        log::debug!(
            "go: budget {}, n {}, m {}, t_sel {}/{}, r {}, co_m {}",
            config.max_evaluations,
            config.population_size,
            config.pool_size,
            config.parent_temperature,
            config.survivor_temperature,
            config.radius,
            config.crossover_points
        );

        let mut session = Session::new(of, config.max_evaluations);
        let stop = match evolve(&mut session, config, rng) {
            ControlFlow::Break(stop) => stop,
            ControlFlow::Continue(never) => match never {},
        };
        Ok(session.report_end(stop))
    }
}

/// The generational loop; only ever ends through a stop condition.
fn evolve<F: ObjFun, R: Rng>(
    session: &mut Session<'_, F>,
    config: &GoConfig,
    rng: &mut R,
) -> ControlFlow<StopReason, Infallible> {
    let of = session.objective();
    let (a, b) = of.bounds();
    let n = config.population_size;

    let mut population = Vec::with_capacity(n);
    for _ in 0..n {
        let x = of.generate_point(rng);
        let fitness = session.evaluate(&x)?;
        population.push(Member { x, fitness });
    }
    sort_members(&mut population);

    let mut generation = 0usize;
    loop {
        generation += 1;
        let mut pool = Vec::with_capacity(config.pool_size);
        for _ in 0..config.pool_size {
            let p1 = &population[rank_select(config.parent_temperature, n, rng)];
            let p2 = &population[rank_select(config.parent_temperature, n, rng)];
            let child = crossover_multi(&p1.x, &p2.x, config.crossover_points);
            let x = cauchy_mutation(&child, a, b, config.radius, config.correction, rng);
            let fitness = session.evaluate(&x)?;
            pool.push(Member { x, fitness });
        }
        sort_members(&mut pool);

        population = select_survivors(pool, n, config.survivor_temperature, rng);
        sort_members(&mut population);
        log::trace!(
            "generation {generation}: best {}, neval {}",
            population[0].fitness,
            session.neval()
        );
    }
}

/// Draws `n` distinct members from a pool sorted best-first.
///
/// Taken members leave the pool, so ranks of later draws refer to what
/// remains; requested ranks beyond the remaining size are clamped.
fn select_survivors<R: Rng>(
    mut pool: Vec<Member>,
    n: usize,
    temperature: f64,
    rng: &mut R,
) -> Vec<Member> {
    let mut survivors = Vec::with_capacity(n);
    for _ in 0..n.min(pool.len()) {
        let i = rank_select(temperature, pool.len(), rng);
        survivors.push(pool.remove(i));
    }
    survivors
}

/// Sorts ascending by fitness (best first).
fn sort_members(members: &mut [Member]) {
    members.sort_by(|a, b| {
        a.fitness
            .partial_cmp(&b.fitness)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
