use thiserror::Error;

/// The main error type for tutti operations
#[derive(Debug, Error)]
pub enum TuttiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Task '{name}' failed: {cause}")]
    Task { name: String, cause: String },

    #[error("Runner error: {0}")]
    Runner(String),
}

/// Result type alias for tutti operations
pub type TuttiResult<T> = Result<T, TuttiError>;
