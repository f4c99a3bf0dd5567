//! Error shared by every repository port

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// `add` was called with an id that is already stored
    #[error("{entity} '{id}' already exists")]
    Duplicate { entity: &'static str, id: String },

    /// `update` was called with an id that is not stored
    #[error("{entity} '{id}' does not exist")]
    Missing { entity: &'static str, id: String },

    #[error("storage backend failure: {message}")]
    Backend { message: String },
}

impl RepositoryError {
    pub fn backend(message: impl Into<String>) -> Self {
        RepositoryError::Backend {
            message: message.into(),
        }
    }
}
