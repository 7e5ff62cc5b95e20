use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::UserId;

pub struct SyncCartLine {
    pub product_id: Uuid,
    pub quantity: u32,
}

/// Replaces the whole cart with the given lines.
pub struct SyncCartParams {
    pub user_id: UserId,
    pub items: Vec<SyncCartLine>,
}

#[async_trait]
pub trait SyncCartUseCase: Send + Sync {
    async fn execute(&self, params: SyncCartParams) -> Result<Vec<CartItem>, CartError>;
}
