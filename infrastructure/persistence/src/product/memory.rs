use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductSearchCriteria;
use business::domain::shared::pagination::{Page, PageRequest};

/// Catalog kept in insertion order; listings return newest first.
#[derive(Default)]
pub struct ProductRepositoryInMemory {
    products: RwLock<Vec<Product>>,
}

impl ProductRepositoryInMemory {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    fn newest_first(mut products: Vec<Product>) -> Vec<Product> {
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        products
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(Self::newest_first(self.products.read().await.clone()))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(Self::newest_first(
            products
                .iter()
                .filter(|p| p.category == category)
                .cloned()
                .collect(),
        ))
    }

    async fn search(
        &self,
        criteria: &ProductSearchCriteria,
        page: PageRequest,
    ) -> Result<Page<Product>, RepositoryError> {
        let matching = Self::newest_first(
            self.products
                .read()
                .await
                .iter()
                .filter(|p| criteria.matches(p))
                .cloned()
                .collect(),
        );

        let total = matching.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(page.limit as usize)
            .collect();

        Ok(Page::new(items, total, page))
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
