use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::OrderStatus;

pub struct UpdateOrderStatusParams {
    pub id: Uuid,
    pub status: OrderStatus,
    pub tracking_number: Option<String>,
}

#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError>;
}
