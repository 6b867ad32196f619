use thiserror::Error;

pub type RatingResult<T> = Result<T, RatingError>;

#[derive(Debug, Error)]
pub enum RatingError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    #[error("invalid listener: {0}")]
    InvalidListener(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
