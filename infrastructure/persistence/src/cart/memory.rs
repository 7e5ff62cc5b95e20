use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::cart::model::CartItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

#[derive(Default)]
pub struct CartRepositoryInMemory {
    items: RwLock<Vec<CartItem>>,
}

impl CartRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for CartRepositoryInMemory {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<CartItem>, RepositoryError> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .filter(|i| &i.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<CartItem, RepositoryError> {
        self.items
            .read()
            .await
            .iter()
            .find(|i| i.id == id && &i.user_id == user_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_product_id(
        &self,
        product_id: Uuid,
        user_id: &UserId,
    ) -> Result<Option<CartItem>, RepositoryError> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .find(|i| i.product_id == product_id && &i.user_id == user_id)
            .cloned())
    }

    async fn save(&self, item: &CartItem) -> Result<(), RepositoryError> {
        let mut items = self.items.write().await;
        if items
            .iter()
            .any(|i| i.id != item.id && i.user_id == item.user_id && i.product_id == item.product_id)
        {
            return Err(RepositoryError::Duplicated);
        }
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item.clone(),
            None => items.push(item.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|i| !(i.id == id && &i.user_id == user_id));
        if items.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|i| &i.user_id != user_id);
        Ok((before - items.len()) as u64)
    }

    async fn replace_all(
        &self,
        user_id: &UserId,
        replacement: &[CartItem],
    ) -> Result<(), RepositoryError> {
        // One write guard covers the delete and the inserts
        let mut items = self.items.write().await;
        items.retain(|i| &i.user_id != user_id);
        items.extend(replacement.iter().cloned());
        Ok(())
    }
}
