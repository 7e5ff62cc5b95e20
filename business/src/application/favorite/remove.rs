use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::remove::{RemoveFavoriteParams, RemoveFavoriteUseCase};
use crate::domain::logger::Logger;

pub struct RemoveFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFavoriteUseCase for RemoveFavoriteUseCaseImpl {
    async fn execute(&self, params: RemoveFavoriteParams) -> Result<(), FavoriteError> {
        self.logger.info(&format!(
            "Removing product {} from favorites of user {}",
            params.product_id, params.user_id
        ));

        self.repository
            .delete(&params.user_id, params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FavoriteError::NotFound,
                other => FavoriteError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::favorite::model::Favorite;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
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

    #[tokio::test]
    async fn should_remove_existing_favorite() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo.expect_delete().times(1).returning(|_, _| Ok(()));

        let use_case = RemoveFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveFavoriteParams {
                user_id: UserId::new("uid-1"),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_not_a_favorite() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = RemoveFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveFavoriteParams {
                user_id: UserId::new("uid-1"),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result, Err(FavoriteError::NotFound)));
    }
}
