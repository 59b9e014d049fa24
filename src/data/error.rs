use thiserror::Error;

/// Reasons a dataset file is rejected. Any of these aborts the whole load.
#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("Unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Row {row}, column '{column}': invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}
