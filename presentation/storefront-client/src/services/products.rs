use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::AuthSession;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{NewProduct, Product, ProductPage, ProductSearchQuery, ProductUpdate};

#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, ApiError>;
    async fn get(&self, id: Uuid) -> Result<Product, ApiError>;
    async fn by_category(&self, slug: &str) -> Result<Vec<Product>, ApiError>;
    async fn search(&self, query: &ProductSearchQuery) -> Result<ProductPage, ApiError>;
    async fn create(&self, product: &NewProduct) -> Result<Product, ApiError>;
    async fn update(&self, id: Uuid, changes: &ProductUpdate) -> Result<Product, ApiError>;
    async fn delete(&self, id: Uuid) -> Result<(), ApiError>;
}

/// Catalog reads are public; create, update and delete need an admin session.
pub struct ProductService {
    client: Arc<ApiClient>,
    session: Arc<dyn AuthSession>,
}

impl ProductService {
    pub fn new(client: Arc<ApiClient>, session: Arc<dyn AuthSession>) -> Self {
        Self { client, session }
    }
}

#[async_trait]
impl ProductGateway for ProductService {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        self.client.get(self.session.as_ref(), "/products").await
    }

    async fn get(&self, id: Uuid) -> Result<Product, ApiError> {
        self.client
            .get(self.session.as_ref(), &format!("/products/{id}"))
            .await
    }

    async fn by_category(&self, slug: &str) -> Result<Vec<Product>, ApiError> {
        self.client
            .get(self.session.as_ref(), &format!("/products/category/{slug}"))
            .await
    }

    async fn search(&self, query: &ProductSearchQuery) -> Result<ProductPage, ApiError> {
        self.client
            .get_with_query(self.session.as_ref(), "/products/search", query)
            .await
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, ApiError> {
        self.client
            .post(self.session.as_ref(), "/products", product)
            .await
    }

    async fn update(&self, id: Uuid, changes: &ProductUpdate) -> Result<Product, ApiError> {
        self.client
            .put(self.session.as_ref(), &format!("/products/{id}"), changes)
            .await
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.client
            .delete(self.session.as_ref(), &format!("/products/{id}"))
            .await
    }
}
