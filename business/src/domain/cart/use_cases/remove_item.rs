use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::UserId;

pub struct RemoveCartItemParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<(), CartError>;
}
