use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

pub struct GetOrderByIdParams {
    pub id: Uuid,
    pub requester: UserId,
    /// Administrators may read any order.
    pub is_admin: bool,
}

#[async_trait]
pub trait GetOrderByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetOrderByIdParams) -> Result<Order, OrderError>;
}
