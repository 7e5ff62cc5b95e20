use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCategoryUseCase for DeleteCategoryUseCaseImpl {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError> {
        self.logger
            .info(&format!("Deleting category: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CategoryError::NotFound,
                other => CategoryError::Repository(other),
            })?;

        self.repository.delete(params.id).await?;

        self.logger
            .info(&format!("Category deleted: {}", params.id));
        Ok(())
    }
}
