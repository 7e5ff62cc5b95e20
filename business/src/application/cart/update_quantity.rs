use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct UpdateCartItemQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemQuantityUseCase for UpdateCartItemQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemQuantityParams) -> Result<CartItem, CartError> {
        self.logger.info(&format!(
            "Setting quantity of cart line {} to {}",
            params.id, params.quantity
        ));

        if params.quantity == 0 {
            return Err(CartError::QuantityNotPositive);
        }

        let line = self
            .repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        let product = self
            .product_repository
            .get_by_id(line.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        if !product.can_supply(params.quantity) {
            return Err(CartError::ProductOutOfStock);
        }

        let updated = line.with_quantity(params.quantity)?;
        self.repository.save(&updated).await?;

        Ok(updated)
    }
}
