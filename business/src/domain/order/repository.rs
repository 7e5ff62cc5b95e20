use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Order;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// The user's orders, newest first.
    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
}
