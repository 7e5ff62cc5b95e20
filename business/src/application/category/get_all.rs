use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct GetAllCategoriesUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCategoriesUseCase for GetAllCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Category>, CategoryError> {
        self.logger.info("Getting active categories");
        let categories = self.repository.get_active().await?;
        self.logger
            .info(&format!("Retrieved {} categories", categories.len()));
        Ok(categories)
    }
}
