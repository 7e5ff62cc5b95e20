use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

pub struct AddFavoriteParams {
    pub user_id: UserId,
    pub product_id: Uuid,
}

#[async_trait]
pub trait AddFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: AddFavoriteParams) -> Result<Product, FavoriteError>;
}
