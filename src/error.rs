use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type DetectResult<T> = Result<T, DetectError>;
