use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

pub struct UpdateOrderStatusUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderStatusUseCase for UpdateOrderStatusUseCaseImpl {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError> {
        self.logger.info(&format!(
            "Updating status of order {} to {}",
            params.id, params.status
        ));

        let order = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        let previous = order.status;
        let updated = order
            .transition_to(params.status, params.tracking_number)
            .inspect_err(|_| {
                self.logger.warn(&format!(
                    "Rejected status change {} -> {} for order {}",
                    previous, params.status, params.id
                ))
            })?;

        self.repository.save(&updated).await?;

        Ok(updated)
    }
}
