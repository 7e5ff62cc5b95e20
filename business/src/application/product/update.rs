use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Verify product exists
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let category_changed = params
            .changes
            .category
            .as_ref()
            .is_some_and(|category| category != &existing.category);

        let updated = existing.apply(params.changes)?;

        if category_changed
            && self
                .category_repository
                .find_active_by_slug(&updated.category)
                .await?
                .is_none()
        {
            return Err(ProductError::CategoryNotFound);
        }

        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::model::Category;
    use crate::domain::product::model::{ProductChanges, ProductProps};
    use crate::domain::product::value_objects::ProductSearchCriteria;
    use crate::domain::shared::pagination::{Page, PageRequest};
    use mockall::mock;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
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
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    mock! {
        pub CategoryRepo {}

        #[async_trait]
        impl CategoryRepository for CategoryRepo {
            async fn get_active(&self) -> Result<Vec<Category>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError>;
            async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError>;
            async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    fn product(name: &str, category: &str, price: &str) -> Product {
        Product::new(ProductProps {
            name: name.to_string(),
            price: Decimal::from_str(price).unwrap(),
            original_price: None,
            image: "/images/placeholder.jpg".to_string(),
            images: vec![],
            category: category.to_string(),
            description: String::new(),
            rating: 4.5,
            review_count: 10,
            in_stock: true,
            stock: None,
            is_best_seller: false,
            is_new: true,
            features: vec![],
            tags: vec![],
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_update_price_without_checking_category() {
        let stored = product("Dichavador de Metal", "acessorios", "49.90");
        let id = stored.id;

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories.expect_find_active_by_slug().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(mock_categories),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateProductParams {
                id,
                changes: ProductChanges {
                    price: Some(Decimal::from_str("44.90").unwrap()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.price, Decimal::from_str("44.90").unwrap());
        assert_eq!(updated.category, "acessorios");
    }

    #[tokio::test]
    async fn should_reject_move_to_unknown_category() {
        let stored = product("Dichavador de Metal", "acessorios", "49.90");
        let id = stored.id;

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        mock_repo.expect_save().never();
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories
            .expect_find_active_by_slug()
            .returning(|_| Ok(None));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(mock_categories),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id,
                changes: ProductChanges {
                    category: Some("inexistente".to_string()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result, Err(ProductError::CategoryNotFound)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::new_v4(),
                changes: ProductChanges::default(),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}
