#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    #[error("favorite.product_not_found")]
    ProductNotFound,
    #[error("favorite.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
