use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::category::model::Category;
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;

#[derive(Default)]
pub struct CategoryRepositoryInMemory {
    categories: RwLock<Vec<Category>>,
}

impl CategoryRepositoryInMemory {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: RwLock::new(categories),
        }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryInMemory {
    async fn get_active(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = self.categories.read().await;
        let mut active: Vec<Category> = categories.iter().filter(|c| c.is_active).cloned().collect();
        active.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(active)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError> {
        self.categories
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.is_active && c.slug.as_str() == slug)
            .cloned())
    }

    async fn save(&self, category: &Category) -> Result<(), RepositoryError> {
        let mut categories = self.categories.write().await;

        // Mirrors the partial unique index on active slugs
        if category.is_active
            && categories
                .iter()
                .any(|c| c.id != category.id && c.is_active && c.slug == category.slug)
        {
            return Err(RepositoryError::Duplicated);
        }

        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category.clone(),
            None => categories.push(category.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut categories = self.categories.write().await;
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::category::model::NewCategoryProps;

    fn category(name: &str, slug: &str, order: i32, active: bool) -> Category {
        Category::new(NewCategoryProps {
            name: name.to_string(),
            slug: slug.to_string(),
            image: None,
            description: String::new(),
            is_active: active,
            display_order: order,
            seo_title: None,
            seo_description: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_list_only_active_categories_by_display_order() {
        let repo = CategoryRepositoryInMemory::new(vec![
            category("Vaporizadores", "vaporizadores", 3, true),
            category("Bongs", "bongs", 1, true),
            category("Antigos", "antigos", 0, false),
        ]);

        let names: Vec<String> = repo
            .get_active()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(names, vec!["Bongs", "Vaporizadores"]);
    }

    #[tokio::test]
    async fn should_find_active_category_by_slug_only() {
        let repo = CategoryRepositoryInMemory::new(vec![category("Antigos", "antigos", 0, false)]);

        assert!(repo.find_active_by_slug("antigos").await.unwrap().is_none());

        repo.save(&category("Bongs", "bongs", 1, true)).await.unwrap();
        assert!(repo.find_active_by_slug("bongs").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn should_reject_second_active_category_with_same_slug() {
        let repo = CategoryRepositoryInMemory::default();
        repo.save(&category("Bongs", "bongs", 1, true)).await.unwrap();

        let result = repo.save(&category("Bongs 2", "bongs", 2, true)).await;

        assert_eq!(result, Err(RepositoryError::Duplicated));
    }

    #[tokio::test]
    async fn should_report_missing_category_on_delete() {
        let repo = CategoryRepositoryInMemory::default();
        assert_eq!(repo.delete(Uuid::new_v4()).await, Err(RepositoryError::NotFound));
    }
}
