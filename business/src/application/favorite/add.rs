use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::Favorite;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;

pub struct AddFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddFavoriteUseCase for AddFavoriteUseCaseImpl {
    async fn execute(&self, params: AddFavoriteParams) -> Result<Product, FavoriteError> {
        self.logger.info(&format!(
            "Adding product {} to favorites of user {}",
            params.product_id, params.user_id
        ));

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FavoriteError::ProductNotFound,
                other => FavoriteError::Repository(other),
            })?;

        if self
            .repository
            .exists(&params.user_id, params.product_id)
            .await?
        {
            self.logger.debug("Product already in favorites");
            return Ok(product);
        }

        let favorite = Favorite::new(params.user_id, params.product_id);
        self.repository.save(&favorite).await?;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::product::model::ProductProps;
    use crate::domain::product::value_objects::ProductSearchCriteria;
    use crate::domain::shared::pagination::{Page, PageRequest};
    use mockall::mock;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub FavoriteRepo {}

        #[async_trait]
        impl FavoriteRepository for FavoriteRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<Favorite>, RepositoryError>;
            async fn exists(&self, user_id: &UserId, product_id: Uuid) -> Result<bool, RepositoryError>;
            async fn save(&self, favorite: &Favorite) -> Result<(), RepositoryError>;
            async fn delete(&self, user_id: &UserId, product_id: Uuid) -> Result<(), RepositoryError>;
        }
    }

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

    fn product(name: &str) -> Product {
        Product::new(ProductProps {
            name: name.to_string(),
            price: Decimal::from_str("89.90").unwrap(),
            original_price: None,
            image: "/images/placeholder.jpg".to_string(),
            images: vec![],
            category: "acessorios".to_string(),
            description: String::new(),
            rating: 4.2,
            review_count: 7,
            in_stock: true,
            stock: None,
            is_best_seller: false,
            is_new: false,
            features: vec![],
            tags: vec![],
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_save_new_favorite() {
        let catalog = product("Cinzeiro de Cerâmica");
        let product_id = catalog.id;

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(move |_| Ok(catalog.clone()));
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo.expect_exists().returning(|_, _| Ok(false));
        mock_repo
            .expect_save()
            .withf(move |favorite| favorite.product_id == product_id)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = AddFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(mock_products),
            logger: mock_logger(),
        };

        let favorite = use_case
            .execute(AddFavoriteParams {
                user_id: UserId::new("uid-1"),
                product_id,
            })
            .await
            .unwrap();

        assert_eq!(favorite.name, "Cinzeiro de Cerâmica");
    }

    #[tokio::test]
    async fn should_be_idempotent_for_existing_favorite() {
        let catalog = product("Cinzeiro de Cerâmica");
        let product_id = catalog.id;

        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(move |_| Ok(catalog.clone()));
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo.expect_exists().returning(|_, _| Ok(true));
        mock_repo.expect_save().never();

        let use_case = AddFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(mock_products),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddFavoriteParams {
                user_id: UserId::new("uid-1"),
                product_id,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_unknown_product() {
        let mut mock_products = MockProductRepo::new();
        mock_products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo.expect_save().never();

        let use_case = AddFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(mock_products),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddFavoriteParams {
                user_id: UserId::new("uid-1"),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result, Err(FavoriteError::ProductNotFound)));
    }
}
