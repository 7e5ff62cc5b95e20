use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::logger::Logger;

pub struct CreateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Creating category: {}", params.props.name));

        let category = Category::new(params.props)?;

        // Slugs only need to be unique among active categories
        if category.is_active
            && self
                .repository
                .find_active_by_slug(category.slug.as_str())
                .await?
                .is_some()
        {
            self.logger
                .warn(&format!("Category slug already taken: {}", category.slug));
            return Err(CategoryError::SlugTaken);
        }

        self.repository.save(&category).await?;

        self.logger
            .info(&format!("Category created with id: {}", category.id));
        Ok(category)
    }
}
