use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_user_orders::{GetUserOrdersParams, GetUserOrdersUseCase};

pub struct GetUserOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserOrdersUseCase for GetUserOrdersUseCaseImpl {
    async fn execute(&self, params: GetUserOrdersParams) -> Result<Vec<Order>, OrderError> {
        self.logger
            .info(&format!("Fetching orders of user: {}", params.user_id));

        let mut orders = self.repository.get_by_user(&params.user_id).await?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        self.logger
            .info(&format!("Found {} orders", orders.len()));
        Ok(orders)
    }
}
