use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::{Category, CategoryChanges};

pub struct UpdateCategoryParams {
    pub id: Uuid,
    pub changes: CategoryChanges,
}

#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError>;
}
