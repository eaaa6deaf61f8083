use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("column not found: {0}.{1}")]
    UnknownColumn(String, String),
    #[error("{0}")]
    Other(String),
}
