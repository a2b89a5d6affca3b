use std::fmt;

#[derive(Debug)]
pub enum MedimateError {
    ClientInput(String),
    Gateway {
        status: u16,
        message: String,
    },
    NotFound(String),
    Persistence(std::io::Error),
    SessionError(String),
    ConfigError(String),
    NetworkError(reqwest::Error),
    Timeout,
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
    Other(String),
}

impl fmt::Display for MedimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MedimateError::ClientInput(msg) => write!(f, "Invalid input: {}", msg),
            MedimateError::Gateway { status, message } => {
                write!(f, "Model API error (status {}): {}", status, message)
            }
            MedimateError::NotFound(name) => write!(f, "Not found: {}", name),
            MedimateError::Persistence(e) => write!(f, "Persistence error: {}", e),
            MedimateError::SessionError(msg) => write!(f, "Session error: {}", msg),
            MedimateError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MedimateError::NetworkError(e) => write!(f, "Network error: {}", e),
            MedimateError::Timeout => write!(f, "Model request timeout"),
            MedimateError::JsonError(e) => write!(f, "JSON error: {}", e),
            MedimateError::YamlError(e) => write!(f, "YAML error: {}", e),
            MedimateError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MedimateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MedimateError::Persistence(e) => Some(e),
            MedimateError::NetworkError(e) => Some(e),
            MedimateError::JsonError(e) => Some(e),
            MedimateError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MedimateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MedimateError::Timeout
        } else {
            MedimateError::NetworkError(err)
        }
    }
}

impl From<std::io::Error> for MedimateError {
    fn from(err: std::io::Error) -> Self {
        MedimateError::Persistence(err)
    }
}

impl From<serde_json::Error> for MedimateError {
    fn from(err: serde_json::Error) -> Self {
        MedimateError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for MedimateError {
    fn from(err: serde_yaml::Error) -> Self {
        MedimateError::YamlError(err)
    }
}

impl From<String> for MedimateError {
    fn from(msg: String) -> Self {
        MedimateError::Other(msg)
    }
}

impl From<&str> for MedimateError {
    fn from(msg: &str) -> Self {
        MedimateError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MedimateError>;
