use std::fmt;

/// A boxed real-valued function of one real variable.
///
/// The `Send + Sync` bounds let a single [`Problem`] be shared across threads,
/// so callers can run several methods on it concurrently.
pub type ScalarFn<'a> = Box<dyn Fn(f64) -> f64 + Send + Sync + 'a>;

/// Defines a scalar root-finding problem.
///
/// A problem always carries the function `f` whose root is sought. Every other
/// field is optional at the type level; each solver method checks that the
/// fields it needs are present when it is called:
///
/// | field      | bisection | fixed point        | Newton   |
/// |------------|-----------|--------------------|----------|
/// | `f`        | required  | used with `alpha`  | required |
/// | `df`       | —         | —                  | required |
/// | `g`        | —         | or `alpha`         | —        |
/// | `x0`       | —         | required           | required |
/// | `[a, b]`   | required  | —                  | —        |
/// | `alpha`    | —         | or `g`             | —        |
///
/// A problem is immutable once built. Solvers never modify it, so the same
/// problem can be solved repeatedly with identical results.
///
/// # Example
///
/// ```
/// use plumb_core::Problem;
///
/// let problem = Problem::new(|x: f64| x * x - 2.0)
///     .with_derivative(|x: f64| 2.0 * x)
///     .with_initial_guess(1.0)
///     .with_bracket(1.0, 2.0);
///
/// assert_eq!(problem.initial_guess(), Some(1.0));
/// assert_eq!(problem.bracket(), Some([1.0, 2.0]));
/// assert!(problem.map().is_none());
/// ```
pub struct Problem<'a> {
    f: ScalarFn<'a>,
    df: Option<ScalarFn<'a>>,
    g: Option<ScalarFn<'a>>,
    x0: Option<f64>,
    bracket: Option<[f64; 2]>,
    alpha: Option<f64>,
}

impl<'a> Problem<'a> {
    /// Creates a problem for the function `f` with no optional fields set.
    pub fn new(f: impl Fn(f64) -> f64 + Send + Sync + 'a) -> Self {
        Self {
            f: Box::new(f),
            df: None,
            g: None,
            x0: None,
            bracket: None,
            alpha: None,
        }
    }

    /// Sets the derivative `df` of `f`, used by Newton's method.
    #[must_use]
    pub fn with_derivative(mut self, df: impl Fn(f64) -> f64 + Send + Sync + 'a) -> Self {
        self.df = Some(Box::new(df));
        self
    }

    /// Sets an explicit iteration map `g`, used by fixed-point iteration.
    #[must_use]
    pub fn with_map(mut self, g: impl Fn(f64) -> f64 + Send + Sync + 'a) -> Self {
        self.g = Some(Box::new(g));
        self
    }

    /// Sets the initial guess `x0`.
    #[must_use]
    pub fn with_initial_guess(mut self, x0: f64) -> Self {
        self.x0 = Some(x0);
        self
    }

    /// Sets the bracket endpoints `a` and `b`, used by bisection.
    #[must_use]
    pub fn with_bracket(mut self, a: f64, b: f64) -> Self {
        self.bracket = Some([a, b]);
        self
    }

    /// Sets the relaxation factor `alpha`.
    ///
    /// Fixed-point iteration uses `g(x) = x + alpha * f(x)` when no explicit
    /// map has been set.
    #[must_use]
    pub fn with_relaxation(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Evaluates `f(x)`.
    pub fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    /// Returns the function `f`.
    pub fn function(&self) -> &(dyn Fn(f64) -> f64 + Send + Sync + 'a) {
        self.f.as_ref()
    }

    /// Returns the derivative, if set.
    pub fn derivative(&self) -> Option<&(dyn Fn(f64) -> f64 + Send + Sync + 'a)> {
        self.df.as_deref()
    }

    /// Returns the explicit iteration map, if set.
    pub fn map(&self) -> Option<&(dyn Fn(f64) -> f64 + Send + Sync + 'a)> {
        self.g.as_deref()
    }

    /// Returns the initial guess `x0`, if set.
    #[must_use]
    pub fn initial_guess(&self) -> Option<f64> {
        self.x0
    }

    /// Returns the bracket `[a, b]` as given, if set.
    #[must_use]
    pub fn bracket(&self) -> Option<[f64; 2]> {
        self.bracket
    }

    /// Returns the relaxation factor `alpha`, if set.
    #[must_use]
    pub fn relaxation(&self) -> Option<f64> {
        self.alpha
    }
}

impl fmt::Debug for Problem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("df", &self.df.is_some())
            .field("g", &self.g.is_some())
            .field("x0", &self.x0)
            .field("bracket", &self.bracket)
            .field("alpha", &self.alpha)
            .finish_non_exhaustive()
    }
}
