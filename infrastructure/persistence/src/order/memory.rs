use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::UserId;

#[derive(Default)]
pub struct OrderRepositoryInMemory {
    orders: RwLock<Vec<Order>>,
}

impl OrderRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryInMemory {
    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError> {
        let mut orders: Vec<Order> = self
            .orders
            .read()
            .await
            .iter()
            .filter(|o| &o.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        self.orders
            .read()
            .await
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut orders = self.orders.write().await;
        match orders.iter_mut().find(|o| o.id == order.id) {
            Some(existing) => *existing = order.clone(),
            None => orders.push(order.clone()),
        }
        Ok(())
    }
}
