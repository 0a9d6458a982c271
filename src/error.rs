use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unreadable document {name}: {reason}")]
    UnreadableDocument { name: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid skill vocabulary: {0}")]
    Vocabulary(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn unreadable(name: impl Into<String>, reason: impl ToString) -> Self {
        Error::UnreadableDocument {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the failure was caused by the uploaded document rather than
    /// by the service itself.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::UnreadableDocument { .. })
    }
}
