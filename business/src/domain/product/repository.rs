use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest};

use super::model::Product;
use super::value_objects::ProductSearchCriteria;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn search(
        &self,
        criteria: &ProductSearchCriteria,
        page: PageRequest,
    ) -> Result<Page<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
