use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use crate::domain::shared::pagination::Page;

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<Page<Product>, ProductError> {
        self.logger.info(&format!(
            "Searching products: query={:?} category={:?} page={} limit={}",
            params.criteria.query, params.criteria.category, params.page.page, params.page.limit
        ));

        let page = self
            .repository
            .search(&params.criteria, params.page)
            .await?;

        self.logger.debug(&format!(
            "Search matched {} products ({} on this page)",
            page.total,
            page.items.len()
        ));
        Ok(page)
    }
}
