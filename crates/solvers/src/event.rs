use crate::Method;

/// Control actions supported by the root-finding solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the history collected so far.
    StopEarly,
}

/// Iteration event emitted by the root-finding solvers.
///
/// One event is emitted per completed iteration, after its history entry has
/// been recorded and before the convergence test runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A bisection step.
    Bisection {
        /// Iteration counter (1-based).
        iter: usize,
        /// Bracket the midpoint was taken from.
        bracket: [f64; 2],
        /// Previous midpoint, or the left endpoint on the first iteration.
        previous: f64,
        /// The new midpoint.
        midpoint: f64,
        /// `f(midpoint)`.
        residual: f64,
    },

    /// A fixed-point step `next = g(x)`.
    FixedPoint {
        /// Iteration counter (1-based).
        iter: usize,
        x: f64,
        next: f64,
    },

    /// A Newton step `next = x - f(x) / f'(x)`.
    Newton {
        /// Iteration counter (1-based).
        iter: usize,
        x: f64,
        next: f64,
        /// `f(x)` at the current iterate.
        residual: f64,
        /// `f'(x)` at the current iterate.
        derivative: f64,
    },
}

impl Event {
    /// Returns the method that emitted this event.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Event::Bisection { .. } => Method::Bisection,
            Event::FixedPoint { .. } => Method::FixedPoint,
            Event::Newton { .. } => Method::Newton,
        }
    }

    /// Returns the 1-based iteration counter.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Event::Bisection { iter, .. }
            | Event::FixedPoint { iter, .. }
            | Event::Newton { iter, .. } => *iter,
        }
    }

    /// Returns the value this iteration computed.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Bisection { midpoint, .. } => *midpoint,
            Event::FixedPoint { next, .. } | Event::Newton { next, .. } => *next,
        }
    }

    /// Returns the value this iteration started from.
    #[must_use]
    pub fn previous(&self) -> f64 {
        match self {
            Event::Bisection { previous, .. } => *previous,
            Event::FixedPoint { x, .. } | Event::Newton { x, .. } => *x,
        }
    }

    /// Returns `|x - previous|`.
    #[must_use]
    pub fn increment(&self) -> f64 {
        (self.x() - self.previous()).abs()
    }

    /// Returns the function value carried by the event, if any.
    ///
    /// Bisection reports `f` at the new midpoint, Newton at the iterate the
    /// step started from. Fixed-point iteration never evaluates `f` directly.
    #[must_use]
    pub fn residual(&self) -> Option<f64> {
        match self {
            Event::Bisection { residual, .. } | Event::Newton { residual, .. } => Some(*residual),
            Event::FixedPoint { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accessors_cover_every_variant() {
        let bisection = Event::Bisection {
            iter: 1,
            bracket: [1.0, 2.0],
            previous: 1.0,
            midpoint: 1.5,
            residual: -0.125,
        };
        let fixed_point = Event::FixedPoint {
            iter: 2,
            x: 1.5,
            next: 1.4,
        };
        let newton = Event::Newton {
            iter: 3,
            x: 1.0,
            next: 1.5,
            residual: -1.0,
            derivative: 2.0,
        };

        assert_eq!(bisection.method(), Method::Bisection);
        assert_eq!(fixed_point.iter(), 2);
        assert_relative_eq!(bisection.increment(), 0.5);
        assert_relative_eq!(fixed_point.increment(), 0.1, epsilon = 1e-12);
        assert_eq!(fixed_point.residual(), None);
        assert_eq!(newton.residual(), Some(-1.0));
        assert_relative_eq!(newton.x(), 1.5);
        assert_relative_eq!(newton.previous(), 1.0);
    }
}
