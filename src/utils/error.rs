use ia_service::IaServiceError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    IaError(IaServiceError),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    CsvError(csv::Error),
    ConfigError(String),
    ValidationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::IaError(err) => write!(f, "IA service error: {}", err),
            AppError::IoError(err) => write!(f, "IO error: {}", err),
            AppError::JsonError(err) => write!(f, "JSON error: {}", err),
            AppError::CsvError(err) => write!(f, "CSV error: {}", err),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::IaError(err) => Some(err),
            AppError::IoError(err) => Some(err),
            AppError::JsonError(err) => Some(err),
            AppError::CsvError(err) => Some(err),
            AppError::ConfigError(_) | AppError::ValidationError(_) => None,
        }
    }
}

impl From<IaServiceError> for AppError {
    fn from(err: IaServiceError) -> Self {
        AppError::IaError(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonError(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::CsvError(err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
