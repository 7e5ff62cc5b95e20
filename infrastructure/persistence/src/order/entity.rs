use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::order::model::{Order, OrderItem};
use business::domain::order::value_objects::{
    Address, OrderStatus, PaymentMethod, PaymentStatus,
};
use business::domain::shared::value_objects::UserId;

use crate::db::to_count;

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub user_id: String,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub status: String,
    pub shipping_address: Json<Address>,
    pub billing_address: Option<Json<Address>>,
    pub payment_method: String,
    pub payment_status: String,
    pub tracking_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct OrderItemEntity {
    pub order_id: Uuid,
    pub position: i32,
    pub product_id: Uuid,
    pub name: String,
    pub image: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total: Decimal,
}

impl OrderItemEntity {
    pub fn into_domain(self) -> OrderItem {
        OrderItem {
            product_id: self.product_id,
            name: self.name,
            image: self.image,
            quantity: to_count(self.quantity),
            unit_price: self.unit_price,
            total: self.total,
        }
    }
}

impl OrderEntity {
    pub fn into_domain(self, items: Vec<OrderItem>) -> Order {
        Order {
            id: self.id,
            user_id: UserId::new(self.user_id),
            items,
            subtotal: self.subtotal,
            shipping: self.shipping,
            tax: self.tax,
            total: self.total,
            status: self
                .status
                .parse::<OrderStatus>()
                .unwrap_or(OrderStatus::Pending),
            shipping_address: self.shipping_address.0,
            billing_address: self.billing_address.map(|a| a.0),
            payment_method: self
                .payment_method
                .parse::<PaymentMethod>()
                .unwrap_or(PaymentMethod::CreditCard),
            payment_status: self
                .payment_status
                .parse::<PaymentStatus>()
                .unwrap_or(PaymentStatus::Pending),
            tracking_number: self.tracking_number,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
