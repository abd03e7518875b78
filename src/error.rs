use crate::graph::GraphConstructionError;
use crate::mst::MstError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error(transparent)]
    GraphConstruction(#[from] GraphConstructionError),

    #[error(transparent)]
    Mst(#[from] MstError),

    #[error("Invariant violated: {message}")]
    InvariantViolation { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Error {
        Error::InvalidInput {
            message: message.into(),
        }
    }
}
