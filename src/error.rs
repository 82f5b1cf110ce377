use thiserror::Error;

use crate::forms::FieldErrors;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Not logged in. Please run 'evallo login' first.")]
    NotAuthenticated,

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl DashboardError {
    /// True for failures raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, DashboardError::Validation(_))
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            DashboardError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> DashboardResult<T>;
    fn with_context<F>(self, f: F) -> DashboardResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> DashboardResult<T> {
        self.map_err(|e| DashboardError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> DashboardResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DashboardError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> DashboardResult<T> {
        self.ok_or_else(|| DashboardError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> DashboardResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| DashboardError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! dashboard_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::DashboardError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::DashboardError::$error_type(format!($fmt, $($arg)*))
    };
}
