use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::AuthSession;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Category, CategoryUpdate, NewCategory};

#[async_trait]
pub trait CategoryGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>, ApiError>;
    async fn get_by_slug(&self, slug: &str) -> Result<Category, ApiError>;
    async fn create(&self, category: &NewCategory) -> Result<Category, ApiError>;
    async fn update(&self, id: Uuid, changes: &CategoryUpdate) -> Result<Category, ApiError>;
    async fn delete(&self, id: Uuid) -> Result<(), ApiError>;
}

pub struct CategoryService {
    client: Arc<ApiClient>,
    session: Arc<dyn AuthSession>,
}

impl CategoryService {
    pub fn new(client: Arc<ApiClient>, session: Arc<dyn AuthSession>) -> Self {
        Self { client, session }
    }
}

#[async_trait]
impl CategoryGateway for CategoryService {
    async fn list(&self) -> Result<Vec<Category>, ApiError> {
        self.client.get(self.session.as_ref(), "/categories").await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Category, ApiError> {
        self.client
            .get(self.session.as_ref(), &format!("/categories/{slug}"))
            .await
    }

    async fn create(&self, category: &NewCategory) -> Result<Category, ApiError> {
        self.client
            .post(self.session.as_ref(), "/categories", category)
            .await
    }

    async fn update(&self, id: Uuid, changes: &CategoryUpdate) -> Result<Category, ApiError> {
        self.client
            .put(self.session.as_ref(), &format!("/categories/{id}"), changes)
            .await
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.client
            .delete(self.session.as_ref(), &format!("/categories/{id}"))
            .await
    }
}
