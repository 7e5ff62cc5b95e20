use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryUseCaseImpl {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Updating category: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CategoryError::NotFound,
                other => CategoryError::Repository(other),
            })?;

        let updated = existing.apply(params.changes)?;

        if updated.is_active {
            let holder = self
                .repository
                .find_active_by_slug(updated.slug.as_str())
                .await?;
            if holder.is_some_and(|other| other.id != updated.id) {
                self.logger
                    .warn(&format!("Category slug already taken: {}", updated.slug));
                return Err(CategoryError::SlugTaken);
            }
        }

        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Category updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::model::{CategoryChanges, NewCategoryProps};
    use mockall::mock;
    use uuid::Uuid;

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

    fn category(slug: &str) -> Category {
        Category::new(NewCategoryProps {
            name: "Sedas".to_string(),
            slug: slug.to_string(),
            image: None,
            description: String::new(),
            is_active: true,
            display_order: 4,
            seo_title: None,
            seo_description: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_keep_own_slug_without_conflict() {
        let existing = category("sedas");
        let id = existing.id;
        let stored = existing.clone();

        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        mock_repo
            .expect_find_active_by_slug()
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateCategoryParams {
                id,
                changes: CategoryChanges {
                    name: Some("Papel de seda".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Papel de seda");
        assert_eq!(updated.slug.as_str(), "sedas");
    }

    #[tokio::test]
    async fn should_reject_slug_owned_by_another_active_category() {
        let existing = category("sedas");
        let id = existing.id;

        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        mock_repo
            .expect_find_active_by_slug()
            .returning(|_| Ok(Some(category("bongs"))));
        mock_repo.expect_save().never();

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCategoryParams {
                id,
                changes: CategoryChanges {
                    slug: Some("bongs".to_string()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result, Err(CategoryError::SlugTaken)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_category_missing() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCategoryParams {
                id: Uuid::new_v4(),
                changes: CategoryChanges::default(),
            })
            .await;

        assert!(matches!(result, Err(CategoryError::NotFound)));
    }
}
