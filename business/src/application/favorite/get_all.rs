use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::get_all::{GetFavoritesParams, GetFavoritesUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;

pub struct GetFavoritesUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFavoritesUseCase for GetFavoritesUseCaseImpl {
    async fn execute(&self, params: GetFavoritesParams) -> Result<Vec<Product>, FavoriteError> {
        self.logger
            .info(&format!("Fetching favorites of user: {}", params.user_id));

        let favorites = self.repository.get_all(&params.user_id).await?;

        let mut products = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            match self.product_repository.get_by_id(favorite.product_id).await {
                Ok(product) => products.push(product),
                // Products removed from the catalog drop out of the list
                Err(RepositoryError::NotFound) => self.logger.debug(&format!(
                    "Skipping favorite of removed product {}",
                    favorite.product_id
                )),
                Err(other) => return Err(FavoriteError::Repository(other)),
            }
        }

        Ok(products)
    }
}
