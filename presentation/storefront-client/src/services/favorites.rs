use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::AuthSession;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AddFavoriteRequest, Product};

#[async_trait]
pub trait FavoritesGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, ApiError>;
    async fn add(&self, product_id: Uuid) -> Result<Product, ApiError>;
    async fn remove(&self, product_id: Uuid) -> Result<(), ApiError>;
}

pub struct FavoritesService {
    client: Arc<ApiClient>,
    session: Arc<dyn AuthSession>,
}

impl FavoritesService {
    pub fn new(client: Arc<ApiClient>, session: Arc<dyn AuthSession>) -> Self {
        Self { client, session }
    }
}

#[async_trait]
impl FavoritesGateway for FavoritesService {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        self.client.get(self.session.as_ref(), "/favorites").await
    }

    async fn add(&self, product_id: Uuid) -> Result<Product, ApiError> {
        self.client
            .post(
                self.session.as_ref(),
                "/favorites",
                &AddFavoriteRequest { product_id },
            )
            .await
    }

    async fn remove(&self, product_id: Uuid) -> Result<(), ApiError> {
        self.client
            .delete(self.session.as_ref(), &format!("/favorites/{product_id}"))
            .await
    }
}
