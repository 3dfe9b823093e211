use plumb_core::{Observer, Problem};

use crate::{Action, Config, Error, Event, HistoryMode, Solution, bisection, fixed_point, newton};

/// A problem paired with a solver configuration.
///
/// Exposes one entry point per method. Each call is independent: it reads the
/// problem and config, builds a fresh history, and shares no state with other
/// calls, so identical calls produce identical solutions. A `RootSolver` is
/// `Send + Sync`, letting callers run several methods on it concurrently.
///
/// # Example
///
/// ```
/// use plumb_core::Problem;
/// use plumb_solvers::{Config, HistoryMode, RootSolver};
///
/// let problem = Problem::new(|x: f64| x * x - 2.0)
///     .with_derivative(|x: f64| 2.0 * x)
///     .with_initial_guess(1.0)
///     .with_bracket(1.0, 2.0);
/// let solver = RootSolver::new(problem, Config::default());
///
/// let newton = solver.newton(HistoryMode::Increments)?;
/// let bisection = solver.bisection(HistoryMode::Iterates)?;
///
/// assert!((newton.root().unwrap() - 2.0_f64.sqrt()).abs() < 1e-6);
/// assert!(bisection.root().is_some());
/// # Ok::<(), plumb_solvers::Error>(())
/// ```
#[derive(Debug)]
pub struct RootSolver<'a> {
    problem: Problem<'a>,
    config: Config,
}

impl<'a> RootSolver<'a> {
    /// Creates a solver for `problem` using `config`.
    #[must_use]
    pub fn new(problem: Problem<'a>, config: Config) -> Self {
        Self { problem, config }
    }

    /// Returns the problem being solved.
    #[must_use]
    pub fn problem(&self) -> &Problem<'a> {
        &self.problem
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Finds a root by bisection.
    ///
    /// # Errors
    ///
    /// See [`bisection::solve`].
    pub fn bisection(&self, mode: HistoryMode) -> Result<Solution, Error> {
        bisection::solve_unobserved(&self.problem, &self.config, mode)
    }

    /// Finds a root by bisection, reporting each iteration to `observer`.
    ///
    /// # Errors
    ///
    /// See [`bisection::solve`].
    pub fn bisection_observed<Obs>(&self, mode: HistoryMode, observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<Event, Action>,
    {
        bisection::solve(&self.problem, &self.config, mode, observer)
    }

    /// Finds a fixed point of the problem's iteration map.
    ///
    /// # Errors
    ///
    /// See [`fixed_point::solve`].
    pub fn fixed_point(&self, mode: HistoryMode) -> Result<Solution, Error> {
        fixed_point::solve_unobserved(&self.problem, &self.config, mode)
    }

    /// Finds a fixed point, reporting each iteration to `observer`.
    ///
    /// # Errors
    ///
    /// See [`fixed_point::solve`].
    pub fn fixed_point_observed<Obs>(
        &self,
        mode: HistoryMode,
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        Obs: Observer<Event, Action>,
    {
        fixed_point::solve(&self.problem, &self.config, mode, observer)
    }

    /// Finds a root with Newton's method.
    ///
    /// # Errors
    ///
    /// See [`newton::solve`].
    pub fn newton(&self, mode: HistoryMode) -> Result<Solution, Error> {
        newton::solve_unobserved(&self.problem, &self.config, mode)
    }

    /// Finds a root with Newton's method, reporting each iteration to `observer`.
    ///
    /// # Errors
    ///
    /// See [`newton::solve`].
    pub fn newton_observed<Obs>(&self, mode: HistoryMode, observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<Event, Action>,
    {
        newton::solve(&self.problem, &self.config, mode, observer)
    }
}
