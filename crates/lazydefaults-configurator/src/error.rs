use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigureError {
    #[error("model already registered: {0}")]
    DuplicateModel(String),
    #[error("duplicate table name: {0}")]
    DuplicateTableName(String),
    #[error("duplicate column name: {0}.{1}")]
    DuplicateColumnName(String, String),
    #[error("column '{0}.{1}' has min {2} greater than max {3}")]
    InvertedBounds(String, String, i64, i64),
    #[error("column '{0}.{1}' has min/max bounds but is not numeric")]
    BoundsOnNonNumericColumn(String, String),
    #[error("column '{0}.{1}' has auto_now but is not a timestamp")]
    AutoNowOnNonTimestampColumn(String, String),
}
