use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Response decoding error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Form file parsing error: {0}")]
    FormFileError(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Document has no element with id '{id}'")]
    MissingElementError { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Response,
    Configuration,
    Document,
    System,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::HttpError(_) => ErrorCategory::Network,
            CalcError::SerializationError(_) => ErrorCategory::Response,
            CalcError::FormFileError(_)
            | CalcError::UrlError(_)
            | CalcError::ConfigError { .. }
            | CalcError::MissingConfigError { .. }
            | CalcError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CalcError::MissingElementError { .. } => ErrorCategory::Document,
            CalcError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the calculator backend: {}", self),
            ErrorCategory::Response => {
                format!("The backend answered with an unexpected payload: {}", self)
            }
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Document => format!("The calculator page is incomplete: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the backend is running and --base-url points at it",
            ErrorCategory::Response => "Make sure --page matches the lab served by the backend",
            ErrorCategory::Configuration => "Run with --help to review the accepted arguments",
            ErrorCategory::Document => "Every calculator page needs a form with id calculator-form",
            ErrorCategory::System => "Check file permissions for the output path",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Network | ErrorCategory::Response => 3,
            ErrorCategory::Document | ErrorCategory::System => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
