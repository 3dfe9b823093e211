//! Capability traits for cross-method observers.
//!
//! These traits abstract over solver event and action types, so an observer
//! can be written once and attached to any method that provides the
//! capability it needs.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a function value
//! - [`HasIncrement`] — events that carry the change between iterates
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use plumb_core::{Observer, Problem};
//! use plumb_observers::traits::{CanStopEarly, HasIncrement};
//! use plumb_solvers::{Config, HistoryMode, RootSolver, Status};
//!
//! /// Stops once steps are small enough for the caller's purposes.
//! struct GoodEnough {
//!     threshold: f64,
//! }
//!
//! impl<E: HasIncrement, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.increment() < self.threshold).then(A::stop_early)
//!     }
//! }
//!
//! let problem = Problem::new(|x: f64| x * x - 2.0)
//!     .with_derivative(|x: f64| 2.0 * x)
//!     .with_initial_guess(1.0);
//! let solver = RootSolver::new(problem, Config::default());
//!
//! let solution = solver
//!     .newton_observed(HistoryMode::Increments, GoodEnough { threshold: 0.1 })
//!     .unwrap();
//! assert_eq!(solution.status, Status::StoppedByObserver);
//! ```

use plumb_solvers::{Action, Event};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event carries no residual.
    fn residual(&self) -> f64;
}

/// An event that carries the absolute change between consecutive values.
pub trait HasIncrement {
    /// Returns `|x_new - x_previous|` for this event.
    fn increment(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// Fixed-point events never evaluate `f`.
impl HasResidual for Event {
    fn residual(&self) -> f64 {
        Event::residual(self).unwrap_or(f64::NAN)
    }
}

impl HasIncrement for Event {
    fn increment(&self) -> f64 {
        Event::increment(self)
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn fixed_point_events_have_no_residual() {
        let event = Event::FixedPoint {
            iter: 1,
            x: 1.0,
            next: 1.5,
        };
        assert!(HasResidual::residual(&event).is_nan());
        assert_relative_eq!(HasIncrement::increment(&event), 0.5);
    }

    #[test]
    fn newton_events_report_residual_at_start_of_step() {
        let event = Event::Newton {
            iter: 1,
            x: 1.0,
            next: 1.5,
            residual: -1.0,
            derivative: 2.0,
        };
        assert_relative_eq!(HasResidual::residual(&event), -1.0);
    }
}
