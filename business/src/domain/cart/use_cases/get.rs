use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::UserId;

pub struct GetCartParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self, params: GetCartParams) -> Result<Vec<CartItem>, CartError>;
}
