use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Vec<CartItem>, CartError> {
        self.logger
            .info(&format!("Fetching cart for user: {}", params.user_id));
        let lines = self.repository.get_all(&params.user_id).await?;

        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            match self.product_repository.get_by_id(line.product_id).await {
                Ok(_) => items.push(line),
                // Lines of products removed from the catalog are purged
                Err(RepositoryError::NotFound) => {
                    self.logger.debug(&format!(
                        "Dropping cart line {} of removed product {}",
                        line.id, line.product_id
                    ));
                    match self.repository.delete(line.id, &params.user_id).await {
                        Ok(()) | Err(RepositoryError::NotFound) => {}
                        Err(other) => return Err(CartError::Repository(other)),
                    }
                }
                Err(other) => return Err(CartError::Repository(other)),
            }
        }

        self.logger
            .debug(&format!("Cart has {} lines", items.len()));
        Ok(items)
    }
}
