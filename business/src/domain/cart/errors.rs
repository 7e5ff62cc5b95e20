#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.quantity_not_positive")]
    QuantityNotPositive,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.product_out_of_stock")]
    ProductOutOfStock,
    #[error("cart.item_not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
