use crate::optimization::evaluate::EvalError;

/// Errors that can occur during golden section search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(Box<dyn std::error::Error + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(Box<dyn std::error::Error + Send + Sync>),

    /// Bracketing ran out of its expansion budget before the objective
    /// rose again. The objective may be unbounded below along the ray.
    #[error("no downhill bracket found within {expansions} expansions")]
    Bracket { expansions: usize },

    /// An abscissa or objective value left the finite range during the
    /// search.
    #[error("objective is not finite near x = {x}")]
    NonFinite { x: f64 },
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: std::error::Error + Send + Sync + 'static,
    PE: std::error::Error + Send + Sync + 'static,
{
    fn from(error: EvalError<ME, PE>) -> Self {
        match error {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
