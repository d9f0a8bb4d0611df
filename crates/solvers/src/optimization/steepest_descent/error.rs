use crate::optimization::evaluate::EvalError;
use crate::optimization::line_search::LineSearchError;

/// Errors that can occur during steepest descent.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(Box<dyn std::error::Error + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(Box<dyn std::error::Error + Send + Sync>),

    /// The line search found no step length along the descent direction.
    #[error("line search failed")]
    LineSearch(#[source] LineSearchError),
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

impl From<LineSearchError> for Error {
    fn from(error: LineSearchError) -> Self {
        Self::LineSearch(error)
    }
}
