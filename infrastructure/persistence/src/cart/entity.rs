use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::CartItem;
use business::domain::shared::value_objects::UserId;

use crate::db::to_count;

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub id: Uuid,
    pub user_id: String,
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartItem {
        CartItem::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.product_id,
            to_count(self.quantity),
            self.unit_price,
            self.created_at,
            self.updated_at,
        )
    }
}
