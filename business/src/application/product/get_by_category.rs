use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};

pub struct GetProductsByCategoryUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsByCategoryUseCase for GetProductsByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsByCategoryParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Fetching products of category: {}", params.category));

        let products = self
            .repository
            .get_by_category(params.category.trim())
            .await?;

        self.logger.debug(&format!(
            "Found {} products in category {}",
            products.len(),
            params.category
        ));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductProps;
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
    async fn should_return_products_of_requested_category() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_category()
            .withf(|category| category == "bongs")
            .returning(|_| Ok(vec![product("Bong de Vidro Premium", "bongs", "299.99")]));

        let use_case = GetProductsByCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetProductsByCategoryParams {
                category: " bongs ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert!(products.iter().all(|p| p.category == "bongs"));
    }

    #[tokio::test]
    async fn should_return_empty_list_for_unknown_category() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_category().returning(|_| Ok(vec![]));

        let use_case = GetProductsByCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetProductsByCategoryParams {
                category: "inexistente".to_string(),
            })
            .await
            .unwrap();

        assert!(products.is_empty());
    }
}
