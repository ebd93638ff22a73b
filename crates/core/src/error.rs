use thiserror::Error;

pub type StudioResult<T> = Result<T, StudioError>;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown deliverable id: {0}")]
    UnknownDeliverable(String),

    #[error("Unknown audience: {0}")]
    UnknownAudience(String),

    #[error("Script block set error: {0}")]
    BlockSet(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
