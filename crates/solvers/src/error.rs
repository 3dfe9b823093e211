use thiserror::Error;

use crate::{ConfigError, History, bisection::BracketError};

/// Errors that abort a root-finding run.
///
/// Running out of iterations is not an error; it is reported as
/// [`Status::MaxIters`](crate::Status::MaxIters) on the returned solution.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The derivative vanished, so the Newton step is undefined.
    ///
    /// `history` holds every iteration completed before `iter`.
    #[error("singular derivative f'({x}) = {derivative} at iteration {iter}")]
    SingularDerivative {
        x: f64,
        derivative: f64,
        iter: usize,
        history: History,
    },

    /// `f` is not finite at a bisection midpoint, so no half can be chosen.
    ///
    /// `history` holds every iteration completed before `iter`.
    #[error("non-finite residual {residual} at x = {x}, iteration {iter}")]
    NonFiniteResidual {
        x: f64,
        residual: f64,
        iter: usize,
        history: History,
    },
}

impl Error {
    /// Returns the partial history carried by the error, if any.
    #[must_use]
    pub fn history(&self) -> Option<&History> {
        match self {
            Error::SingularDerivative { history, .. }
            | Error::NonFiniteResidual { history, .. } => Some(history),
            Error::InvalidBracket(_) | Error::InvalidConfig(_) => None,
        }
    }
}
