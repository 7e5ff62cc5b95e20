use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::AuthSession;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CreateOrderRequest, Order, UpdateOrderStatusRequest};

#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn create(&self, request: CreateOrderRequest) -> Result<Order, ApiError>;
    /// Orders of the signed-in user, newest first.
    async fn mine(&self) -> Result<Vec<Order>, ApiError>;
    async fn get(&self, id: Uuid) -> Result<Order, ApiError>;
    async fn update_status(
        &self,
        id: Uuid,
        request: UpdateOrderStatusRequest,
    ) -> Result<Order, ApiError>;
}

pub struct OrderService {
    client: Arc<ApiClient>,
    session: Arc<dyn AuthSession>,
}

impl OrderService {
    pub fn new(client: Arc<ApiClient>, session: Arc<dyn AuthSession>) -> Self {
        Self { client, session }
    }
}

#[async_trait]
impl OrderGateway for OrderService {
    async fn create(&self, request: CreateOrderRequest) -> Result<Order, ApiError> {
        self.client
            .post(self.session.as_ref(), "/orders", &request)
            .await
    }

    async fn mine(&self) -> Result<Vec<Order>, ApiError> {
        self.client.get(self.session.as_ref(), "/orders").await
    }

    async fn get(&self, id: Uuid) -> Result<Order, ApiError> {
        self.client
            .get(self.session.as_ref(), &format!("/orders/{id}"))
            .await
    }

    async fn update_status(
        &self,
        id: Uuid,
        request: UpdateOrderStatusRequest,
    ) -> Result<Order, ApiError> {
        self.client
            .put(
                self.session.as_ref(),
                &format!("/orders/{id}/status"),
                &request,
            )
            .await
    }
}
