use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;

pub struct GetCategoryBySlugParams {
    pub slug: String,
}

#[async_trait]
pub trait GetCategoryBySlugUseCase: Send + Sync {
    async fn execute(&self, params: GetCategoryBySlugParams) -> Result<Category, CategoryError>;
}
