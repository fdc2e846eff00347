use thiserror::Error;

#[derive(Error, Debug)]
pub enum SongbookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid store data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No {0} registered yet")]
    EmptyCatalog(&'static str),

    #[error("{0}")]
    Precondition(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl SongbookError {
    /// Whether the error is recoverable at the prompt: the shell reports
    /// it and returns to the menu instead of terminating the session.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::EmptyCatalog(_)
                | Self::Precondition(_)
                | Self::NotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SongbookError>;
