use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductProps;
    use crate::domain::product::value_objects::ProductSearchCriteria;
    use crate::domain::shared::pagination::{Page, PageRequest};
    use mockall::mock;
    use mockall::predicate::eq;
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
    async fn should_return_product_when_found() {
        let stored = product("Vaporizador Portátil", "vaporizadores", "899.00");
        let id = stored.id;

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(stored.clone()));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let found = use_case.execute(GetProductByIdParams { id }).await.unwrap();

        assert_eq!(found.id, id);
        assert_eq!(found.name, "Vaporizador Portátil");
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}
