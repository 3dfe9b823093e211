use thiserror::Error;

/// Reasons a bracket cannot be used for bisection.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint in [{left}, {right}]")]
    NonFinite { left: f64, right: f64 },

    /// Endpoints are equal, giving zero width.
    #[error("zero width: both endpoints are {value}")]
    ZeroWidth { value: f64 },

    /// The function is non-finite at an endpoint.
    #[error("f({x}) = {value} is not finite")]
    NonFiniteValue { x: f64, value: f64 },

    /// Function values at the endpoints do not have strictly opposite signs.
    #[error("no sign change: f({left}) = {left_value}, f({right}) = {right_value}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },
}

/// Returns true if `u` and `v` are non-zero with opposite signs.
///
/// Compares signs directly instead of testing `u * v < 0`, which can
/// underflow to zero or overflow for extreme values.
pub(super) fn opposite_signs(u: f64, v: f64) -> bool {
    (u < 0.0 && v > 0.0) || (u > 0.0 && v < 0.0)
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bracket;

        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite { left: a, right: b });
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth { value: a });
        }

        if a < b {
            Ok(Self { left: a, right: b })
        } else {
            Ok(Self { left: b, right: a })
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

/// Current bracket bounds and the function value at the left bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_value: f64,
}

impl Bracket {
    /// Creates a validated bracket from its bounds and endpoint values.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if an endpoint value is non-finite or the values
    /// do not have strictly opposite signs.
    pub(super) fn new(
        bounds: Bounds,
        left_value: f64,
        right_value: f64,
    ) -> Result<Self, BracketError> {
        let [left, right] = bounds.as_array();

        for (x, value) in [(left, left_value), (right, right_value)] {
            if !value.is_finite() {
                return Err(BracketError::NonFiniteValue { x, value });
            }
        }

        if !opposite_signs(left_value, right_value) {
            return Err(BracketError::NoSignChange {
                left,
                right,
                left_value,
                right_value,
            });
        }

        Ok(Self {
            left,
            right,
            left_value,
        })
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    ///
    /// Halves each endpoint before adding so that brackets near `f64::MAX`
    /// do not overflow.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * self.left + 0.5 * self.right
    }

    /// Returns half the bracket width.
    pub(super) fn half_width(&self) -> f64 {
        0.5 * self.right - 0.5 * self.left
    }

    /// Shrinks the bracket to the half that still brackets a root.
    ///
    /// Keeps `[left, x]` when `value` and the left value have strictly
    /// opposite signs, and `[x, right]` otherwise. A zero `value` falls into
    /// the second case; callers treat it as converged before shrinking.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        if opposite_signs(value, self.left_value) {
            self.right = x;
        } else {
            self.left = x;
            self.left_value = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bracket(bounds: [f64; 2], left_value: f64, right_value: f64) -> Bracket {
        Bracket::new(
            Bounds::new(bounds).expect("valid bounds"),
            left_value,
            right_value,
        )
        .expect("valid bracket")
    }

    #[test]
    fn bounds_reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_eq!(bounds.as_array(), [1.0, 3.0]);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert!(matches!(
            Bounds::new([f64::NAN, 1.0]),
            Err(BracketError::NonFinite { .. })
        ));
        assert!(matches!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite { .. })
        ));
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert_eq!(
            Bounds::new([2.0, 2.0]),
            Err(BracketError::ZeroWidth { value: 2.0 })
        );
    }

    #[test]
    fn new_bracket_rejects_same_signs() {
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        let err = Bracket::new(bounds, 1.0, 2.0);
        assert!(matches!(err, Err(BracketError::NoSignChange { .. })));
    }

    #[test]
    fn new_bracket_rejects_zero_endpoint_value() {
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        let err = Bracket::new(bounds, 0.0, 2.0);
        assert!(matches!(err, Err(BracketError::NoSignChange { .. })));
    }

    #[test]
    fn new_bracket_rejects_non_finite_value() {
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        let err = Bracket::new(bounds, -1.0, f64::NAN);
        assert!(matches!(
            err,
            Err(BracketError::NonFiniteValue { x, .. }) if x == 1.0
        ));
    }

    #[test]
    fn shrink_keeps_sign_change() {
        let mut bracket = bracket([0.0, 2.0], -1.0, 1.0);

        bracket.shrink(1.0, -0.5);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);

        bracket.shrink(1.5, 0.25);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);
        assert_relative_eq!(bracket.midpoint(), 1.25);
        assert_relative_eq!(bracket.half_width(), 0.25);
    }

    #[test]
    fn midpoint_and_half_width_do_not_overflow() {
        let widest = bracket([-f64::MAX, f64::MAX], -1.0, 1.0);
        assert_eq!(widest.midpoint(), 0.0);
        assert_eq!(widest.half_width(), f64::MAX);

        let large = bracket([1e308, 1.7e308], -1.0, 1.0);
        assert_relative_eq!(large.midpoint(), 1.35e308);
        assert_relative_eq!(large.half_width(), 0.35e308);
    }

    #[test]
    fn opposite_signs_is_strict() {
        assert!(opposite_signs(-1.0, 1.0));
        assert!(opposite_signs(1e-200, -1e-200));
        assert!(!opposite_signs(0.0, 1.0));
        assert!(!opposite_signs(-0.0, 1.0));
        assert!(!opposite_signs(2.0, 3.0));
    }
}
