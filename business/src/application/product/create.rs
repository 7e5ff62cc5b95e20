use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.props.name));

        let product = Product::new(params.props)?;

        // The referenced category must exist and be active
        if self
            .category_repository
            .find_active_by_slug(&product.category)
            .await?
            .is_none()
        {
            self.logger
                .warn(&format!("Unknown category for product: {}", product.category));
            return Err(ProductError::CategoryNotFound);
        }

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
