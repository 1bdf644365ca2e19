use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error! status: {0}")]
    Http(u16),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReviewsError>;
