use chrono::{DateTime, Utc};
use poem_openapi::Object;
use rust_decimal::Decimal;
use uuid::Uuid;

use business::domain::cart::model::CartItem;
use business::domain::cart::use_cases::sync::SyncCartLine;

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub product_id: Uuid,
    #[oai(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateCartItemRequest {
    /// New quantity, at least 1
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartLineRequest {
    pub product_id: Uuid,
    pub quantity: u32,
}

impl From<CartLineRequest> for SyncCartLine {
    fn from(line: CartLineRequest) -> Self {
        Self {
            product_id: line.product_id,
            quantity: line.quantity,
        }
    }
}

/// Full replacement of the caller's cart.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SyncCartRequest {
    pub items: Vec<CartLineRequest>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
    /// Unit price captured when the product was added
    pub price: Decimal,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            total: item.line_total(),
            id: item.id,
            product_id: item.product_id,
            quantity: item.quantity,
            price: item.unit_price,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
