/// A callable that maps a typed input to a typed output.
///
/// Solvers call a model repeatedly while searching over its inputs. A model
/// is free to be anything from a closed-form expression to a full
/// simulation; solvers only rely on [`call`](Model::call).
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the model cannot produce an output.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a single model call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<I, O> {
    /// The input the model was called with.
    pub input: I,

    /// The output the model produced.
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a snapshot from an input and the output it produced.
    #[must_use]
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
