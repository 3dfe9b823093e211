//! Newton's method `x_{n+1} = x_n - f(x_n) / f'(x_n)`.
//!
//! The run converges when `|x_next - x| < tol`.
//!
//! Before each step the derivative is checked against
//! [`SINGULAR_DERIVATIVE_THRESHOLD`]. A derivative at or below it in magnitude
//! makes the step undefined or explosive, so the run fails immediately with
//! [`Error::SingularDerivative`], which carries the history collected so far.
//! That failure is distinct from running out of iterations, which returns
//! [`Status::MaxIters`].

use plumb_core::{Observer, Problem};
use tracing::{debug, trace, warn};

use crate::{
    Action, Config, ConfigError, Criterion, Error, Event, History, HistoryMode, Method, Solution,
    Status,
};

/// Derivative magnitude at or below which a Newton step is refused.
pub const SINGULAR_DERIVATIVE_THRESHOLD: f64 = 1e-10;

/// Runs Newton's method on `problem`, reporting each iteration to `observer`.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the problem has no derivative or no
/// initial guess, and [`Error::SingularDerivative`] if `|f'(x)|` drops to
/// [`SINGULAR_DERIVATIVE_THRESHOLD`] or below at an iterate.
pub fn solve<Obs>(
    problem: &Problem<'_>,
    config: &Config,
    mode: HistoryMode,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let df = problem.derivative().ok_or(ConfigError::MissingDerivative)?;
    let x0 = problem
        .initial_guess()
        .ok_or(ConfigError::MissingInitialGuess)?;

    let mut history = History::starting_at(mode, x0);
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let derivative = df(x);
        if derivative.abs() <= SINGULAR_DERIVATIVE_THRESHOLD {
            warn!(iter, x, derivative, "singular derivative, aborting Newton's method");
            return Err(Error::SingularDerivative {
                x,
                derivative,
                iter,
                history,
            });
        }

        let residual = problem.eval(x);
        let next = x - residual / derivative;
        history.record(x, next);
        trace!(iter, x = next, residual, derivative, "newton step");

        let event = Event::Newton {
            iter,
            x,
            next,
            residual,
            derivative,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(iter, x = next, "newton stopped by observer");
            return Ok(Solution::unconverged(
                Method::Newton,
                Status::StoppedByObserver,
                next,
                iter,
                history,
            ));
        }

        if (next - x).abs() < config.tol() {
            debug!(iter, root = next, "newton converged");
            return Ok(Solution::converged(
                Method::Newton,
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
        "newton did not converge"
    );
    Ok(Solution::unconverged(
        Method::Newton,
        Status::MaxIters,
        x,
        config.max_iters(),
        history,
    ))
}

/// Runs Newton's method without observation.
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
