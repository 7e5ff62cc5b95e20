use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Favorite;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// The user's favorites, most recent first.
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Favorite>, RepositoryError>;
    async fn exists(&self, user_id: &UserId, product_id: Uuid) -> Result<bool, RepositoryError>;
    async fn save(&self, favorite: &Favorite) -> Result<(), RepositoryError>;
    async fn delete(&self, user_id: &UserId, product_id: Uuid) -> Result<(), RepositoryError>;
}
