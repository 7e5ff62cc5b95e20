use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateCartItemQuantityParams {
    pub id: Uuid,
    pub user_id: UserId,
    pub quantity: u32,
}

#[async_trait]
pub trait UpdateCartItemQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartItemQuantityParams) -> Result<CartItem, CartError>;
}
