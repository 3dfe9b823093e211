use crate::{History, Method};

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    ///
    /// This is the "no convergence" outcome. It is a normal result rather
    /// than an error, and the history is complete.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The stopping test that declared convergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Criterion {
    /// `|f(x)| < tol` at the new value.
    Residual,

    /// Bisection bracket half-width `(b - a) / 2 < tol`.
    BracketWidth,

    /// `|x_next - x| < tol` between consecutive iterates.
    Step,
}

/// The result of a root-finding run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Method that produced this solution.
    pub method: Method,

    /// Final solver status.
    pub status: Status,

    /// Last value computed: the final midpoint or iterate.
    pub x: f64,

    /// Number of completed iterations (1-based count of update steps).
    pub iters: usize,

    /// Test that declared convergence, if the run converged.
    pub criterion: Option<Criterion>,

    /// Per-iteration values recorded during the run.
    pub history: History,
}

impl Solution {
    /// Returns the root estimate, or `None` if the run did not converge.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        self.is_converged().then_some(self.x)
    }

    /// Returns true if the run met its convergence criterion.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    pub(crate) fn converged(
        method: Method,
        x: f64,
        iters: usize,
        criterion: Criterion,
        history: History,
    ) -> Self {
        Self {
            method,
            status: Status::Converged,
            x,
            iters,
            criterion: Some(criterion),
            history,
        }
    }

    pub(crate) fn unconverged(
        method: Method,
        status: Status,
        x: f64,
        iters: usize,
        history: History,
    ) -> Self {
        Self {
            method,
            status,
            x,
            iters,
            criterion: None,
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::HistoryMode;

    #[test]
    fn root_only_reported_when_converged() {
        let history = History::new(HistoryMode::Iterates);

        let converged =
            Solution::converged(Method::Newton, 1.5, 3, Criterion::Step, history.clone());
        assert_eq!(converged.root(), Some(1.5));

        let exhausted = Solution::unconverged(Method::Newton, Status::MaxIters, 1.5, 3, history);
        assert_eq!(exhausted.root(), None);
        assert_eq!(exhausted.criterion, None);
    }
}
