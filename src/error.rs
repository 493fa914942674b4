use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // -- General error
    #[error("Error: {0}")]
    Error(String),

    #[error("Can't set tracing Global Default")]
    SetGlobalDefaultError(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("Can't set the logger")]
    SetLoggerError(#[from] tracing_log::log::SetLoggerError),

    // -- Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // -- Remote store error
    #[error("Failed to fetch expenses.")]
    FetchFailed,

    #[error("Failed to add expense.")]
    CreateFailed,

    #[error("Failed to update expense.")]
    UpdateFailed,

    #[error("Failed to delete expense.")]
    DeleteFailed,

    #[error("{0}")]
    ReqwestError(String),

    #[error("Malformed response at {path}: {message}")]
    DecodeError { path: String, message: String },

    #[error("Invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // -- File error
    #[error("Failed to open file")]
    FileError(#[from] std::io::Error),

    #[error("Failed to serialise yaml")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Configuration error")]
    ConfigurationError(#[from] config::ConfigError),

    // -- Command error
    #[error("Expense {0} not found.")]
    NotFound(String),

    #[error("Input error")]
    InputError(#[from] dialoguer::Error),
}

// Reqwest errors are flattened to their message, which is what the user sees
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::ReqwestError(error.to_string())
    }
}

/// Reasons a draft is refused before anything is sent to the remote store.
///
/// Checked in declaration order; only the first failure is reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Expense name is required.")]
    MissingName,

    #[error("Amount must be a valid number greater than zero.")]
    InvalidAmount,

    #[error("Category is required.")]
    MissingCategory,

    #[error("Category must be one of: groceries, bills, entertainment, transport.")]
    UnknownCategory(String),
}
