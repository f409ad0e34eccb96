use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("schema error for profile '{id}': missing or invalid field '{field}'")]
    Schema { id: String, field: &'static str },

    #[error("query against an empty index")]
    EmptyIndex,

    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
