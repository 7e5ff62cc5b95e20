use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::sync::{SyncCartLine, SyncCartParams, SyncCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct SyncCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Folds repeated products into one line, keeping first-seen order.
fn merge_lines(lines: Vec<SyncCartLine>) -> Vec<SyncCartLine> {
    let mut merged: Vec<SyncCartLine> = Vec::with_capacity(lines.len());
    for line in lines {
        match merged.iter_mut().find(|m| m.product_id == line.product_id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => merged.push(line),
        }
    }
    merged
}

#[async_trait]
impl SyncCartUseCase for SyncCartUseCaseImpl {
    async fn execute(&self, params: SyncCartParams) -> Result<Vec<CartItem>, CartError> {
        self.logger.info(&format!(
            "Replacing cart of user {} with {} lines",
            params.user_id,
            params.items.len()
        ));

        if params.items.iter().any(|line| line.quantity == 0) {
            return Err(CartError::QuantityNotPositive);
        }

        let mut items = Vec::with_capacity(params.items.len());
        for line in merge_lines(params.items) {
            let product = self
                .product_repository
                .get_by_id(line.product_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => CartError::ProductNotFound,
                    other => CartError::Repository(other),
                })?;

            if !product.can_supply(line.quantity) {
                return Err(CartError::ProductOutOfStock);
            }

            items.push(CartItem::new(
                params.user_id.clone(),
                product.id,
                line.quantity,
                product.price,
            )?);
        }

        self.repository.replace_all(&params.user_id, &items).await?;

        self.logger
            .info(&format!("Cart of user {} synchronized", params.user_id));
        Ok(items)
    }
}
