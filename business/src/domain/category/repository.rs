use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Active categories ordered by display order.
    async fn get_active(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError>;
    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError>;
    async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
