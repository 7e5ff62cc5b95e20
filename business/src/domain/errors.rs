/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.invalid_reference")]
    InvalidReference,
    #[error("repository.missing_field")]
    MissingField,
    #[error("repository.invalid_format")]
    InvalidFormat,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }

    /// True for errors caused by the shape of the submitted data rather than
    /// by the store itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RepositoryError::Duplicated
                | RepositoryError::InvalidReference
                | RepositoryError::MissingField
                | RepositoryError::InvalidFormat
        )
    }
}
