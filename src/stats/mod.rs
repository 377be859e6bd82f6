//! Performance statistics over repeated runs.
//!
//! A stochastic search is judged on many independent runs, each reduced to
//! the number of evaluations it needed to reach the target (or a failure):
//!
//! - **REL** (reliability): fraction of successful runs.
//! - **MNE** (mean number of evaluations): mean count over successful runs.
//! - **FEO** (Feoktistov criterion): `MNE / REL`, the expected evaluation
//!   cost per success when failed runs are restarted.
//!
//! [`repeat`] drives the runs with one derived seed per run, so a whole
//! experiment is reproducible from a single base seed.

use crate::session::SearchReport;

/// REL / MNE / FEO of a batch of runs.
///
/// Undefined statistics are `NaN`: all three when there are no runs, MNE
/// and FEO when no run succeeded.
///
/// # Examples
///
/// ```
/// use u_heurbench::stats::Summary;
///
/// let s = Summary::from_counts([Some(100), None, Some(300), None]);
/// assert_eq!(s.successes, 2);
/// assert_eq!(s.rel, 0.5);
/// assert_eq!(s.mne, 200.0);
/// assert_eq!(s.feo, 400.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Number of runs.
    pub runs: usize,
    /// Runs that reached the target.
    pub successes: usize,
    /// Reliability.
    pub rel: f64,
    /// Mean number of evaluations of successful runs.
    pub mne: f64,
    /// Feoktistov criterion.
    pub feo: f64,
}

impl Summary {
    /// Summarizes per-run evaluation counts, `None` marking a failed run.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = Option<usize>>,
    {
        let mut runs = 0usize;
        let mut successes = 0usize;
        let mut total = 0.0;
        for count in counts {
            runs += 1;
            if let Some(n) = count {
                successes += 1;
                total += n as f64;
            }
        }

        let rel = if runs == 0 {
            f64::NAN
        } else {
            successes as f64 / runs as f64
        };
        let mne = if successes == 0 {
            f64::NAN
        } else {
            total / successes as f64
        };
        let feo = if successes == 0 { f64::NAN } else { mne / rel };

        Self {
            runs,
            successes,
            rel,
            mne,
            feo,
        }
    }

    /// Summarizes search reports by their `neval`.
    pub fn from_reports<'a, I>(reports: I) -> Self
    where
        I: IntoIterator<Item = &'a SearchReport>,
    {
        Self::from_counts(reports.into_iter().map(|r| r.neval))
    }
}

/// Runs `f(seed)` for `seed = base_seed, base_seed + 1, ...`, `runs` times.
///
/// Stops at the first error. Results are in run order.
///
/// # Examples
///
/// ```
/// use u_heurbench::fsa::{FsaConfig, FsaRunner};
/// use u_heurbench::objfun::TspGrid;
/// use u_heurbench::stats::{repeat, Summary};
///
/// let tsp = TspGrid::new(3, 2).unwrap();
/// let reports = repeat(10, 100, |seed| {
///     FsaRunner::run(&tsp, &FsaConfig::default().with_seed(seed))
/// })
/// .unwrap();
/// let summary = Summary::from_reports(&reports);
/// assert_eq!(summary.runs, 10);
/// ```
pub fn repeat<T, E, F>(runs: usize, base_seed: u64, mut f: F) -> Result<Vec<T>, E>
where
    F: FnMut(u64) -> Result<T, E>,
{
    (0..runs as u64)
        .map(|i| f(base_seed.wrapping_add(i)))
        .collect()
}

/// Parallel version of [`repeat`] using rayon.
///
/// Runs share no state beyond `f`; each gets the same seed it would get
/// from [`repeat`], so results are identical to the sequential driver.
#[cfg(feature = "parallel")]
pub fn repeat_parallel<T, E, F>(runs: usize, base_seed: u64, f: F) -> Result<Vec<T>, E>
where
    T: Send,
    E: Send,
    F: Fn(u64) -> Result<T, E> + Sync,
{
    use rayon::prelude::*;

    (0..runs as u64)
        .into_par_iter()
        .map(|i| f(base_seed.wrapping_add(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeurError;
    use crate::objfun::{TspGrid, Zebra3};
    use crate::sg::{SgConfig, SgRunner};

    #[test]
    fn test_no_runs_is_nan() {
        let s = Summary::from_counts(std::iter::empty());
        assert_eq!(s.runs, 0);
        assert!(s.rel.is_nan());
        assert!(s.mne.is_nan());
        assert!(s.feo.is_nan());
    }

    #[test]
    fn test_all_failed() {
        let s = Summary::from_counts([None, None, None]);
        assert_eq!(s.rel, 0.0);
        assert!(s.mne.is_nan());
        assert!(s.feo.is_nan());
    }

    #[test]
    fn test_all_succeeded() {
        let s = Summary::from_counts([Some(10), Some(20), Some(30)]);
        assert_eq!(s.rel, 1.0);
        assert_eq!(s.mne, 20.0);
        assert_eq!(s.feo, 20.0);
    }

    #[test]
    fn test_seeds_are_consecutive() {
        let seeds: Result<Vec<u64>, HeurError> = repeat(4, 7, Ok);
        assert_eq!(seeds.unwrap(), vec![7, 8, 9, 10]);
    }

    #[test]
    fn test_first_error_stops() {
        let mut calls = 0;
        let result: Result<Vec<u64>, &str> = repeat(10, 0, |seed| {
            calls += 1;
            if seed == 2 {
                Err("boom")
            } else {
                Ok(seed)
            }
        });
        assert_eq!(result, Err("boom"));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_summary_of_real_runs() {
        let zebra = Zebra3::new(2).unwrap();
        let reports = repeat(20, 0, |seed| {
            let config = SgConfig::default()
                .with_max_evaluations(5_000)
                .with_unbounded_descent()
                .with_seed(seed);
            SgRunner::run(&zebra, &config)
        })
        .unwrap();

        let s = Summary::from_reports(&reports);
        assert_eq!(s.runs, 20);
        assert_eq!(s.successes, reports.iter().filter(|r| r.is_success()).count());
        assert!(s.rel > 0.0);
        assert!(s.mne >= 1.0 && s.mne <= 5_000.0);
        assert!(s.feo >= s.mne);
    }

    #[test]
    fn test_repeat_is_reproducible() {
        let tsp = TspGrid::new(3, 3).unwrap();
        let run = || {
            repeat(5, 11, |seed| {
                SgRunner::run(&tsp, &SgConfig::default().with_seed(seed))
            })
            .unwrap()
        };
        let a: Vec<Option<usize>> = run().iter().map(|r| r.neval).collect();
        let b: Vec<Option<usize>> = run().iter().map(|r| r.neval).collect();
        assert_eq!(a, b);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let tsp = TspGrid::new(3, 2).unwrap();
        let f = |seed| SgRunner::run(&tsp, &SgConfig::default().with_seed(seed));
        let seq: Vec<Option<usize>> = repeat(16, 3, f)
            .unwrap()
            .iter()
            .map(|r| r.neval)
            .collect();
        let par: Vec<Option<usize>> = repeat_parallel(16, 3, f)
            .unwrap()
            .iter()
            .map(|r| r.neval)
            .collect();
        assert_eq!(seq, par);
    }
}
