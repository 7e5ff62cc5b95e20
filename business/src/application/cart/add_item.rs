use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartItem, CartError> {
        self.logger.info(&format!(
            "Adding product {} x{} to cart of user {}",
            params.product_id, params.quantity, params.user_id
        ));

        if params.quantity == 0 {
            return Err(CartError::QuantityNotPositive);
        }

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let existing = self
            .repository
            .find_by_product_id(params.product_id, &params.user_id)
            .await?;

        // Same product again: grow the existing line and keep its captured price
        let item = match existing {
            Some(line) => {
                let quantity = line.quantity.saturating_add(params.quantity);
                line.with_quantity(quantity)?
            }
            None => CartItem::new(
                params.user_id,
                params.product_id,
                params.quantity,
                product.price,
            )?,
        };

        if !product.can_supply(item.quantity) {
            self.logger.warn(&format!(
                "Product {} cannot supply {} units",
                product.id, item.quantity
            ));
            return Err(CartError::ProductOutOfStock);
        }

        self.repository.save(&item).await?;

        self.logger
            .info(&format!("Cart line saved: {}", item.id));
        Ok(item)
    }
}
