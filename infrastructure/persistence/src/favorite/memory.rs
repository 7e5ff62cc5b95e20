use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::favorite::model::Favorite;
use business::domain::favorite::repository::FavoriteRepository;
use business::domain::shared::value_objects::UserId;

#[derive(Default)]
pub struct FavoriteRepositoryInMemory {
    favorites: RwLock<Vec<Favorite>>,
}

impl FavoriteRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryInMemory {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Favorite>, RepositoryError> {
        let mut favorites: Vec<Favorite> = self
            .favorites
            .read()
            .await
            .iter()
            .filter(|f| &f.user_id == user_id)
            .cloned()
            .collect();
        favorites.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(favorites)
    }

    async fn exists(&self, user_id: &UserId, product_id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self
            .favorites
            .read()
            .await
            .iter()
            .any(|f| &f.user_id == user_id && f.product_id == product_id))
    }

    async fn save(&self, favorite: &Favorite) -> Result<(), RepositoryError> {
        let mut favorites = self.favorites.write().await;
        if !favorites
            .iter()
            .any(|f| f.user_id == favorite.user_id && f.product_id == favorite.product_id)
        {
            favorites.push(favorite.clone());
        }
        Ok(())
    }

    async fn delete(&self, user_id: &UserId, product_id: Uuid) -> Result<(), RepositoryError> {
        let mut favorites = self.favorites.write().await;
        let before = favorites.len();
        favorites.retain(|f| !(&f.user_id == user_id && f.product_id == product_id));
        if favorites.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
