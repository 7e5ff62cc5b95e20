#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.name_empty")]
    NameEmpty,
    #[error("category.slug_invalid")]
    SlugInvalid,
    #[error("category.slug_taken")]
    SlugTaken,
    #[error("category.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
