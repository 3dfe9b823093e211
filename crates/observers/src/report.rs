//! Plain-text summaries of root-finding runs.

use std::fmt;

use plumb_solvers::{Error, Method, Solution};

/// A printable summary of one root-finding run.
///
/// Built from the `Result` a solver returns, so every outcome is reported:
/// the root estimate when the run converged, "did not converge" when it hit
/// the iteration cap or was stopped, and the failure reason for hard errors.
///
/// # Example
///
/// ```
/// use plumb_core::Problem;
/// use plumb_observers::Report;
/// use plumb_solvers::{Config, HistoryMode, Method, RootSolver};
///
/// let problem = Problem::new(|x: f64| x - 2.0)
///     .with_derivative(|_| 1.0)
///     .with_initial_guess(0.0);
/// let solver = RootSolver::new(problem, Config::default());
/// let result = solver.newton(HistoryMode::Iterates);
///
/// let report = Report::new("x - 2 = 0", Method::Newton, &result).with_initial_guess(0.0);
/// assert!(report.to_string().contains("Root approximation: 2"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    description: String,
    method: Method,
    initial_guess: Option<f64>,
    outcome: Outcome,
    iters: usize,
}

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Converged(f64),
    NotConverged,
    Failed(String),
}

impl Report {
    /// Summarizes the result of running `method` on the problem described by
    /// `description`.
    ///
    /// For a hard error the iteration count is the length of the partial
    /// history the error carries, or zero if it carries none.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        method: Method,
        result: &Result<Solution, Error>,
    ) -> Self {
        let (outcome, iters) = match result {
            Ok(solution) => match solution.root() {
                Some(root) => (Outcome::Converged(root), solution.iters),
                None => (Outcome::NotConverged, solution.iters),
            },
            Err(error) => (
                Outcome::Failed(error.to_string()),
                error.history().map_or(0, |history| history.len()),
            ),
        };

        Self {
            description: description.into(),
            method,
            initial_guess: None,
            outcome,
            iters,
        }
    }

    /// Adds the initial guess to the report.
    #[must_use]
    pub fn with_initial_guess(mut self, x0: f64) -> Self {
        self.initial_guess = Some(x0);
        self
    }

    /// Returns the root estimate, if the run converged.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Converged(root) => Some(root),
            Outcome::NotConverged | Outcome::Failed(_) => None,
        }
    }

    /// Returns the number of completed iterations.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.iters
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Function: {}", self.description)?;
        writeln!(f, "  Method: {}", self.method)?;
        if let Some(x0) = self.initial_guess {
            writeln!(f, "  Initial guess: {x0}")?;
        }
        match &self.outcome {
            Outcome::Converged(root) => writeln!(f, "  Root approximation: {root}")?,
            Outcome::NotConverged => writeln!(f, "  Root approximation: did not converge")?,
            Outcome::Failed(reason) => writeln!(f, "  Root approximation: failed ({reason})")?,
        }
        writeln!(f, "  Iterations needed: {}", self.iters)?;
        write!(f, "{}", "-".repeat(50))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use plumb_core::Problem;
    use plumb_solvers::{Config, HistoryMode, RootSolver};

    #[test]
    fn converged_run_reports_root_and_iterations() {
        let problem = Problem::new(|x| x - 2.0)
            .with_derivative(|_| 1.0)
            .with_initial_guess(0.0);
        let result = RootSolver::new(problem, Config::default()).newton(HistoryMode::Iterates);

        let report = Report::new("x - 2 = 0", Method::Newton, &result).with_initial_guess(0.0);
        assert_eq!(report.root(), Some(2.0));
        assert_eq!(report.iters(), 2);
        assert_eq!(
            report.to_string(),
            format!(
                "Function: x - 2 = 0\n  Method: Newton's\n  Initial guess: 0\n  \
                 Root approximation: 2\n  Iterations needed: 2\n{}",
                "-".repeat(50)
            )
        );
    }

    #[test]
    fn exhausted_run_reports_no_convergence() {
        let problem = Problem::new(|x| x)
            .with_map(|x| 2.0 * x)
            .with_initial_guess(1.0);
        let config = Config::new(1e-6, 3).unwrap();
        let result = RootSolver::new(problem, config).fixed_point(HistoryMode::Iterates);

        let report = Report::new("g(x) = 2x", Method::FixedPoint, &result);
        assert_eq!(report.root(), None);
        assert_eq!(report.iters(), 3);

        let text = report.to_string();
        assert!(text.contains("Method: Fixed Point"));
        assert!(text.contains("Root approximation: did not converge"));
        assert!(!text.contains("Initial guess"));
    }

    #[test]
    fn hard_error_reports_reason_and_partial_iterations() {
        let problem = Problem::new(|x| x * x + 1.0)
            .with_derivative(|x| 2.0 * x)
            .with_initial_guess(0.0);
        let result = RootSolver::new(problem, Config::default()).newton(HistoryMode::Increments);

        let report = Report::new("x^2 + 1 = 0", Method::Newton, &result);
        assert_eq!(report.root(), None);
        assert_eq!(report.iters(), 0);
        assert!(report.to_string().contains("failed (singular derivative"));
    }

    #[test]
    fn config_error_is_reported() {
        let result = RootSolver::new(Problem::new(|x| x), Config::default())
            .newton(HistoryMode::Iterates);

        let report = Report::new("x = 0", Method::Newton, &result);
        assert!(
            report
                .to_string()
                .contains("Newton's method requires a derivative")
        );
    }
}
