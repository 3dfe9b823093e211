//! Fixed-point iteration `x_{n+1} = g(x_n)`.
//!
//! The map is the problem's explicit iteration map when one is set. Otherwise
//! it is the relaxed residual map `g(x) = x + alpha * f(x)`, built on each call
//! from the problem's relaxation factor without modifying the problem.
//!
//! The run converges when `|x_next - x| < tol`. There is no divergence
//! detection: a map that is not a contraction near the root runs until the
//! iteration cap and returns [`Status::MaxIters`] with the diverging history.

use plumb_core::{Observer, Problem};
use tracing::{debug, trace};

use crate::{
    Action, Config, ConfigError, Criterion, Error, Event, History, HistoryMode, Method, Solution,
    Status,
};

/// The iteration map used by a fixed-point run.
enum Map<'p, 'a> {
    Explicit(&'p (dyn Fn(f64) -> f64 + Send + Sync + 'a)),
    Relaxed { problem: &'p Problem<'a>, alpha: f64 },
}

impl<'p, 'a> Map<'p, 'a> {
    fn from_problem(problem: &'p Problem<'a>) -> Result<Self, ConfigError> {
        match (problem.map(), problem.relaxation()) {
            (Some(g), _) => Ok(Map::Explicit(g)),
            (None, Some(alpha)) => Ok(Map::Relaxed { problem, alpha }),
            (None, None) => Err(ConfigError::MissingMap),
        }
    }

    fn apply(&self, x: f64) -> f64 {
        match self {
            Map::Explicit(g) => g(x),
            Map::Relaxed { problem, alpha } => x + alpha * problem.eval(x),
        }
    }
}

/// Runs fixed-point iteration on `problem`, reporting each iteration to `observer`.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the problem has no initial guess, or
/// has neither an iteration map nor a relaxation factor.
pub fn solve<Obs>(
    problem: &Problem<'_>,
    config: &Config,
    mode: HistoryMode,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let x0 = problem
        .initial_guess()
        .ok_or(ConfigError::MissingInitialGuess)?;
    let map = Map::from_problem(problem)?;

    let mut history = History::starting_at(mode, x0);
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let next = map.apply(x);
        history.record(x, next);
        trace!(iter, x = next, "fixed-point step");

        let event = Event::FixedPoint { iter, x, next };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(iter, x = next, "fixed-point iteration stopped by observer");
            return Ok(Solution::unconverged(
                Method::FixedPoint,
                Status::StoppedByObserver,
                next,
                iter,
                history,
            ));
        }

        if (next - x).abs() < config.tol() {
            debug!(iter, root = next, "fixed-point iteration converged");
            return Ok(Solution::converged(
                Method::FixedPoint,
                next,
                iter,
                Criterion::Step,
                history,
            ));
        }

        x = next;
    }

    debug!(
        max_iters = config.max_iters(),
        last = x,
        "fixed-point iteration did not converge"
    );
    Ok(Solution::unconverged(
        Method::FixedPoint,
        Status::MaxIters,
        x,
        config.max_iters(),
        history,
    ))
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(
    problem: &Problem<'_>,
    config: &Config,
    mode: HistoryMode,
) -> Result<Solution, Error> {
    solve(problem, config, mode, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn explicit_map_takes_precedence_over_relaxation() {
        let problem = Problem::new(|x| x - 3.0)
            .with_map(|x| 0.5 * x)
            .with_relaxation(-1.0);
        let map = Map::from_problem(&problem).expect("map");
        assert_relative_eq!(map.apply(4.0), 2.0);
    }

    #[test]
    fn relaxed_map_uses_residual() {
        let problem = Problem::new(|x| x - 3.0).with_relaxation(-0.5);
        let map = Map::from_problem(&problem).expect("map");
        // 4 + (-0.5) * (4 - 3)
        assert_relative_eq!(map.apply(4.0), 3.5);
    }

    #[test]
    fn missing_map_and_relaxation_is_an_error() {
        let problem = Problem::new(|x| x - 3.0);
        assert!(matches!(
            Map::from_problem(&problem),
            Err(ConfigError::MissingMap)
        ));
    }
}
