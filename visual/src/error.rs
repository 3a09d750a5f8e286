use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Coordinate arrays handed to a drawing primitive differ in length.
    #[error("x and y must have same first dimension, but have lengths {x} and {y}")]
    LengthMismatch { x: usize, y: usize },

    /// The plotted function failed while being evaluated on the grid.
    #[error("Function evaluation failed: {0}")]
    Evaluation(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Could not decode homotopy data: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn length_mismatch(x: usize, y: usize) -> Self {
        Self::LengthMismatch { x, y }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}
