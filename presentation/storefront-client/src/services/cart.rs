use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::AuthSession;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AddToCartRequest, CartItem, CartLine, SyncCartRequest, UpdateCartItemRequest};

#[async_trait]
pub trait CartGateway: Send + Sync {
    async fn get(&self) -> Result<Vec<CartItem>, ApiError>;
    async fn add(&self, product_id: Uuid, quantity: u32) -> Result<CartItem, ApiError>;
    async fn update(&self, item_id: Uuid, quantity: u32) -> Result<CartItem, ApiError>;
    async fn remove(&self, item_id: Uuid) -> Result<(), ApiError>;
    async fn clear(&self) -> Result<(), ApiError>;
    /// Replaces the whole server cart with `lines`.
    async fn sync(&self, lines: Vec<CartLine>) -> Result<Vec<CartItem>, ApiError>;
}

pub struct CartService {
    client: Arc<ApiClient>,
    session: Arc<dyn AuthSession>,
}

impl CartService {
    pub fn new(client: Arc<ApiClient>, session: Arc<dyn AuthSession>) -> Self {
        Self { client, session }
    }
}

#[async_trait]
impl CartGateway for CartService {
    async fn get(&self) -> Result<Vec<CartItem>, ApiError> {
        self.client.get(self.session.as_ref(), "/cart").await
    }

    async fn add(&self, product_id: Uuid, quantity: u32) -> Result<CartItem, ApiError> {
        let body = AddToCartRequest {
            product_id,
            quantity,
        };
        self.client.post(self.session.as_ref(), "/cart", &body).await
    }

    async fn update(&self, item_id: Uuid, quantity: u32) -> Result<CartItem, ApiError> {
        let body = UpdateCartItemRequest { quantity };
        self.client
            .put(self.session.as_ref(), &format!("/cart/{item_id}"), &body)
            .await
    }

    async fn remove(&self, item_id: Uuid) -> Result<(), ApiError> {
        self.client
            .delete(self.session.as_ref(), &format!("/cart/{item_id}"))
            .await
    }

    async fn clear(&self) -> Result<(), ApiError> {
        self.client.delete(self.session.as_ref(), "/cart").await
    }

    async fn sync(&self, lines: Vec<CartLine>) -> Result<Vec<CartItem>, ApiError> {
        let body = SyncCartRequest { items: lines };
        self.client.put(self.session.as_ref(), "/cart", &body).await
    }
}
