use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhrasalError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Option {option} cannot take {message}")]
    OptionShape { option: String, message: String },
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Parse error: {message}")]
    Parse { message: String },
    #[error("Config error: {0}")]
    Config(String),
    #[error("Logger error: {0}")]
    Logger(String),
    #[error("Realization engine not reachable at {url}: {message}")]
    Unreachable { url: String, message: String },
    #[error("Erroneous realization: {0}")]
    Realization(String),
}

pub type Result<T> = std::result::Result<T, PhrasalError>;

// Helper conversions
impl From<serde_json::Error> for PhrasalError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse { message: e.to_string() }
    }
}
impl From<config::ConfigError> for PhrasalError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}
