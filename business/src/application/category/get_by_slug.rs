use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_by_slug::{
    GetCategoryBySlugParams, GetCategoryBySlugUseCase,
};
use crate::domain::logger::Logger;

pub struct GetCategoryBySlugUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoryBySlugUseCase for GetCategoryBySlugUseCaseImpl {
    async fn execute(&self, params: GetCategoryBySlugParams) -> Result<Category, CategoryError> {
        self.logger
            .debug(&format!("Looking up category by slug: {}", params.slug));

        self.repository
            .find_active_by_slug(&params.slug)
            .await?
            .ok_or(CategoryError::NotFound)
    }
}
