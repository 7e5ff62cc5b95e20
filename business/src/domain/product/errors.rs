#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.category_empty")]
    CategoryEmpty,
    #[error("product.rating_out_of_range")]
    RatingOutOfRange,
    #[error("product.category_not_found")]
    CategoryNotFound,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
