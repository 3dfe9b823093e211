//! Scalar root finders that record their iteration history.
//!
//! A [`RootSolver`] pairs a [`Problem`] with a [`Config`] and offers one entry
//! point per method:
//!
//! - [`bisection`] — guaranteed convergence on a sign-changing bracket
//! - [`fixed_point`] — iteration of an explicit or relaxed map `g`
//! - [`newton`] — quadratic convergence near simple roots, given `f'`
//!
//! Every run returns a [`Solution`] holding the last computed value, the
//! iteration count, a [`Status`], and a [`History`] with one entry per
//! iteration, either the iterates themselves or the absolute increments
//! between them (see [`HistoryMode`]).
//!
//! # Outcomes
//!
//! - Converged: [`Status::Converged`], and [`Solution::root`] returns the estimate.
//! - Iteration cap exhausted: [`Status::MaxIters`], [`Solution::root`] returns
//!   `None`, history complete. This is a value, not an error.
//! - Hard failure: an [`Error`]. Configuration and bracket problems fail before
//!   any iteration; a singular Newton derivative fails mid-run and carries the
//!   partial history.
//!
//! # Observers
//!
//! The `*_observed` entry points accept any [`Observer`] of [`Event`]s, which
//! can watch each iteration or return [`Action::StopEarly`].
//!
//! [`Problem`]: plumb_core::Problem
//! [`Observer`]: plumb_core::Observer

mod config;
mod error;
mod event;
mod history;
mod method;
mod solution;
mod solver;

pub mod bisection;
pub mod fixed_point;
pub mod newton;


pub use bisection::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use history::{History, HistoryMode};
pub use method::Method;
pub use newton::SINGULAR_DERIVATIVE_THRESHOLD;
pub use solution::{Criterion, Solution, Status};
pub use solver::RootSolver;
