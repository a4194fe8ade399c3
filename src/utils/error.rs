use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {status_text}")]
    Server { status_text: String },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ClientError {
    /// 依錯誤類型判斷嚴重程度，CLI 以此決定退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClientError::Http(e) if e.is_connect() || e.is_timeout() => ErrorSeverity::Medium,
            ClientError::Http(_) | ClientError::Server { .. } => ErrorSeverity::High,
            ClientError::Serialization(_) => ErrorSeverity::High,
            ClientError::Url(_)
            | ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. }
            | ClientError::MissingConfigError { .. } => ErrorSeverity::Critical,
            ClientError::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClientError::Http(e) if e.is_connect() => {
                "Check that the job server is running and the base URL is correct"
            }
            ClientError::Http(e) if e.is_decode() => {
                "The server answered with an unexpected body; check the server logs"
            }
            ClientError::Http(_) => "Retry the request once the network is available",
            ClientError::Server { .. } => "Check the job parameters and the server logs",
            ClientError::Url(_) => "Use an absolute http(s) base URL such as http://localhost:8000/",
            ClientError::Io(_) => "Check that the file exists and is readable",
            ClientError::Serialization(_) => "Check that the input file contains valid JSON",
            ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. }
            | ClientError::MissingConfigError { .. } => "Fix the configuration file or CLI flags",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::Http(e) if e.is_connect() => {
                "Could not reach the job server".to_string()
            }
            ClientError::Server { status_text } => {
                format!("The job server rejected the request ({})", status_text)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
