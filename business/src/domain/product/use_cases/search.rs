use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductSearchCriteria;
use crate::domain::shared::pagination::{Page, PageRequest};

pub struct SearchProductsParams {
    pub criteria: ProductSearchCriteria,
    pub page: PageRequest,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Result<Page<Product>, ProductError>;
}
