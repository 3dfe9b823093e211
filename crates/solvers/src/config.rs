use thiserror::Error;

/// Configuration shared by all root-finding methods.
///
/// `tol` is the convergence threshold and `max_iters` the iteration cap. What
/// `tol` is compared against depends on the method:
///
/// - bisection: `|f(c)| < tol` at the midpoint `c`, and optionally the bracket
///   half-width `(b - a) / 2 < tol` (see [`Config::with_width_test`])
/// - fixed point and Newton: the step `|x_next - x| < tol`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: f64,
    max_iters: usize,
    width_test: bool,
}

/// Errors caused by missing or invalid solver configuration.
///
/// Raised before any iteration runs.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tol must be finite and positive, got {got}")]
    Tolerance { got: f64 },

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("Newton's method requires a derivative")]
    MissingDerivative,

    #[error("method requires an initial guess")]
    MissingInitialGuess,

    #[error("bisection requires a bracket")]
    MissingBracket,

    #[error("fixed-point iteration requires an iteration map or a relaxation factor")]
    MissingMap,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and iteration cap.
    ///
    /// The bracket-width stopping rule for bisection starts disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(tol: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ConfigError::Tolerance { got: tol });
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            tol,
            max_iters,
            width_test: false,
        })
    }

    /// Enables the bisection bracket-width stopping rule.
    ///
    /// Bisection then also stops once `(b - a) / 2 < tol`, in addition to the
    /// function-value test, converging on whichever triggers first.
    #[must_use]
    pub fn with_width_test(mut self) -> Self {
        self.width_test = true;
        self
    }

    /// Returns the convergence threshold.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns true if the bisection bracket-width rule is enabled.
    #[must_use]
    pub fn width_test(&self) -> bool {
        self.width_test
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classical_settings() {
        let config = Config::default();
        assert_eq!(config.tol(), 1e-6);
        assert_eq!(config.max_iters(), 100);
        assert!(!config.width_test());
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tol in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Config::new(tol, 10),
                Err(ConfigError::Tolerance { .. })
            ));
        }
    }

    #[test]
    fn rejects_zero_iteration_cap() {
        assert_eq!(Config::new(1e-6, 0), Err(ConfigError::MaxIters));
    }

    #[test]
    fn width_test_is_opt_in() {
        let config = Config::new(1e-3, 5).unwrap().with_width_test();
        assert!(config.width_test());
        assert_eq!(config.max_iters(), 5);
    }
}
