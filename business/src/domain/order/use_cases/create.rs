use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::{Address, PaymentMethod};
use crate::domain::shared::value_objects::UserId;

pub struct OrderLineRequest {
    pub product_id: Uuid,
    pub quantity: u32,
}

pub struct CreateOrderParams {
    pub user_id: UserId,
    pub items: Vec<OrderLineRequest>,
    pub shipping_address: Address,
    pub billing_address: Option<Address>,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError>;
}
