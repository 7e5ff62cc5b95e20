use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::shared::value_objects::UserId;

pub struct RemoveFavoriteParams {
    pub user_id: UserId,
    pub product_id: Uuid,
}

#[async_trait]
pub trait RemoveFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFavoriteParams) -> Result<(), FavoriteError>;
}
