use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChainError>;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("I/O Error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("Error parsing configuration file: {source}")]
    Config {
        #[from]
        source: serde_yaml::Error,
    },
    #[error("Error rendering chain as JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
    #[error("Mining worker failed: {message}")]
    Worker { message: String },
    #[error("Mining task could not be joined: {source}")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
}
