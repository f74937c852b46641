use crate::form::FormField;
use crate::index::RowIndex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Missing info: please enter the {0}.")]
    MissingField(FormField),

    #[error("Invalid input: quantity must be a whole number, got \"{0}\".")]
    InvalidQuantity(String),

    #[error("Invalid input: the {0} may not contain '|' or line breaks.")]
    ReservedCharacter(FormField),

    #[error("No selection: please {0}.")]
    NoSelection(&'static str),

    #[error("No data available.")]
    EmptyDataset,

    #[error("Row {0} not found in the current view")]
    RowNotFound(RowIndex),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl StockError {
    /// Whether the operation was rejected up front, leaving all state untouched.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StockError::MissingField(_)
                | StockError::InvalidQuantity(_)
                | StockError::ReservedCharacter(_)
                | StockError::NoSelection(_)
                | StockError::EmptyDataset
                | StockError::RowNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
