//! Bisection on a sign-changing bracket.
//!
//! # Algorithm
//!
//! Starting from `[a, b]` with `f(a)` and `f(b)` of strictly opposite signs,
//! each iteration evaluates the midpoint `c = (a + b) / 2` and keeps the half
//! of the bracket across which `f` still changes sign.
//!
//! # Stopping rules
//!
//! - `|f(c)| < tol` (always on)
//! - `(b - a) / 2 < tol` (enabled by [`Config::with_width_test`])
//!
//! The run converges on whichever rule triggers first and reports it in
//! [`Solution::criterion`]. If `f(c)` is exactly zero the function-value rule
//! has already fired, so the bracket update never has to break that tie.
//!
//! # History
//!
//! [`HistoryMode::Iterates`] records each midpoint. [`HistoryMode::Increments`]
//! records `|c - previous midpoint|`, taking the left endpoint as the midpoint
//! before the first iteration.

mod bracket;

pub use bracket::BracketError;

use plumb_core::{Observer, Problem};
use tracing::{debug, trace, warn};

use crate::{
    Action, Config, ConfigError, Criterion, Error, Event, History, HistoryMode, Method, Solution,
    Status,
};

use bracket::{Bounds, Bracket};

/// Finds a root of `problem` by bisection, reporting each iteration to `observer`.
///
/// Reversed endpoints are reordered before the run starts.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the problem has no bracket,
/// [`Error::InvalidBracket`] if the endpoints are invalid or `f` does not
/// change sign across them, and [`Error::NonFiniteResidual`] if `f` is not
/// finite at a midpoint. The latter carries the iterations completed before it.
pub fn solve<Obs>(
    problem: &Problem<'_>,
    config: &Config,
    mode: HistoryMode,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(problem.bracket().ok_or(ConfigError::MissingBracket)?)?;
    let [left, right] = bounds.as_array();
    let mut bracket = Bracket::new(bounds, problem.eval(left), problem.eval(right))?;

    let mut history = History::new(mode);
    let mut previous = left;

    for iter in 1..=config.max_iters() {
        let current = bracket.as_array();
        let midpoint = bracket.midpoint();
        let residual = problem.eval(midpoint);

        if !residual.is_finite() {
            warn!(iter, midpoint, residual, "non-finite residual, aborting bisection");
            return Err(Error::NonFiniteResidual {
                x: midpoint,
                residual,
                iter,
                history,
            });
        }

        history.record(previous, midpoint);
        trace!(iter, midpoint, residual, "bisection step");

        let event = Event::Bisection {
            iter,
            bracket: current,
            previous,
            midpoint,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(iter, midpoint, "bisection stopped by observer");
            return Ok(Solution::unconverged(
                Method::Bisection,
                Status::StoppedByObserver,
                midpoint,
                iter,
                history,
            ));
        }

        let criterion = if residual.abs() < config.tol() {
            Some(Criterion::Residual)
        } else if config.width_test() && bracket.half_width() < config.tol() {
            Some(Criterion::BracketWidth)
        } else {
            None
        };

        if let Some(criterion) = criterion {
            debug!(iter, root = midpoint, ?criterion, "bisection converged");
            return Ok(Solution::converged(
                Method::Bisection,
                midpoint,
                iter,
                criterion,
                history,
            ));
        }

        bracket.shrink(midpoint, residual);
        previous = midpoint;
    }

    debug!(
        max_iters = config.max_iters(),
        last = previous,
        "bisection did not converge"
    );
    Ok(Solution::unconverged(
        Method::Bisection,
        Status::MaxIters,
        previous,
        config.max_iters(),
        history,
    ))
}

/// Runs bisection without observation.
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
