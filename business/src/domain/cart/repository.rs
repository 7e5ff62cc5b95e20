use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::CartItem;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<CartItem>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<CartItem, RepositoryError>;
    async fn find_by_product_id(
        &self,
        product_id: Uuid,
        user_id: &UserId,
    ) -> Result<Option<CartItem>, RepositoryError>;
    async fn save(&self, item: &CartItem) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
    /// Removes every line of the user's cart, returning how many were removed.
    async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
    /// Atomically replaces the user's cart with `items`.
    async fn replace_all(
        &self,
        user_id: &UserId,
        items: &[CartItem],
    ) -> Result<(), RepositoryError>;
}
