#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.items_empty")]
    ItemsEmpty,
    #[error("order.quantity_not_positive")]
    QuantityNotPositive,
    #[error("order.shipping_address_incomplete")]
    ShippingAddressIncomplete,
    #[error("order.billing_address_incomplete")]
    BillingAddressIncomplete,
    #[error("order.product_not_found")]
    ProductNotFound,
    #[error("order.product_out_of_stock")]
    ProductOutOfStock,
    #[error("order.invalid_status_transition")]
    InvalidStatusTransition,
    #[error("order.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
