use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::{Category, NewCategoryProps};

pub struct CreateCategoryParams {
    pub props: NewCategoryProps,
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError>;
}
