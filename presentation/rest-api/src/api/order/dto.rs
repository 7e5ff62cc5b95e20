use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use rust_decimal::Decimal;
use uuid::Uuid;

use business::domain::order::model::{Order, OrderItem};
use business::domain::order::use_cases::create::OrderLineRequest;
use business::domain::order::value_objects::{
    Address, OrderStatus, PaymentMethod, PaymentStatus,
};

#[derive(Debug, Clone, Copy, Enum)]
pub enum OrderStatusDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "confirmed")]
    Confirmed,
    #[oai(rename = "processing")]
    Processing,
    #[oai(rename = "shipped")]
    Shipped,
    #[oai(rename = "delivered")]
    Delivered,
    #[oai(rename = "cancelled")]
    Cancelled,
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => OrderStatusDto::Pending,
            OrderStatus::Confirmed => OrderStatusDto::Confirmed,
            OrderStatus::Processing => OrderStatusDto::Processing,
            OrderStatus::Shipped => OrderStatusDto::Shipped,
            OrderStatus::Delivered => OrderStatusDto::Delivered,
            OrderStatus::Cancelled => OrderStatusDto::Cancelled,
        }
    }
}

impl From<OrderStatusDto> for OrderStatus {
    fn from(dto: OrderStatusDto) -> Self {
        match dto {
            OrderStatusDto::Pending => OrderStatus::Pending,
            OrderStatusDto::Confirmed => OrderStatus::Confirmed,
            OrderStatusDto::Processing => OrderStatus::Processing,
            OrderStatusDto::Shipped => OrderStatus::Shipped,
            OrderStatusDto::Delivered => OrderStatus::Delivered,
            OrderStatusDto::Cancelled => OrderStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, Enum)]
pub enum PaymentMethodDto {
    #[oai(rename = "credit_card")]
    CreditCard,
    #[oai(rename = "pix")]
    Pix,
}

impl From<PaymentMethod> for PaymentMethodDto {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::CreditCard => PaymentMethodDto::CreditCard,
            PaymentMethod::Pix => PaymentMethodDto::Pix,
        }
    }
}

impl From<PaymentMethodDto> for PaymentMethod {
    fn from(dto: PaymentMethodDto) -> Self {
        match dto {
            PaymentMethodDto::CreditCard => PaymentMethod::CreditCard,
            PaymentMethodDto::Pix => PaymentMethod::Pix,
        }
    }
}

#[derive(Debug, Clone, Copy, Enum)]
pub enum PaymentStatusDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "paid")]
    Paid,
    #[oai(rename = "failed")]
    Failed,
    #[oai(rename = "refunded")]
    Refunded,
}

impl From<PaymentStatus> for PaymentStatusDto {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Pending => PaymentStatusDto::Pending,
            PaymentStatus::Paid => PaymentStatusDto::Paid,
            PaymentStatus::Failed => PaymentStatusDto::Failed,
            PaymentStatus::Refunded => PaymentStatusDto::Refunded,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddressDto {
    pub street: String,
    pub number: String,
    #[oai(skip_serializing_if_is_none)]
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl From<AddressDto> for Address {
    fn from(dto: AddressDto) -> Self {
        Self {
            street: dto.street,
            number: dto.number,
            complement: dto.complement,
            neighborhood: dto.neighborhood,
            city: dto.city,
            state: dto.state,
            zip_code: dto.zip_code,
            country: dto.country,
        }
    }
}

impl From<Address> for AddressDto {
    fn from(address: Address) -> Self {
        Self {
            street: address.street,
            number: address.number,
            complement: address.complement,
            neighborhood: address.neighborhood,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
            country: address.country,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderLineDto {
    pub product_id: Uuid,
    pub quantity: u32,
}

impl From<OrderLineDto> for OrderLineRequest {
    fn from(line: OrderLineDto) -> Self {
        Self {
            product_id: line.product_id,
            quantity: line.quantity,
        }
    }
}

/// Checkout submission. Prices are taken from the catalog.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderLineDto>,
    pub shipping_address: AddressDto,
    #[oai(skip_serializing_if_is_none)]
    pub billing_address: Option<AddressDto>,
    pub payment_method: PaymentMethodDto,
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatusDto,
    #[oai(skip_serializing_if_is_none)]
    pub tracking_number: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub product_id: Uuid,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    /// Unit price at order time
    pub price: Decimal,
    pub total: Decimal,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            image: item.image,
            quantity: item.quantity,
            price: item.unit_price,
            total: item.total,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub user_id: String,
    pub items: Vec<OrderItemResponse>,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub status: OrderStatusDto,
    pub shipping_address: AddressDto,
    #[oai(skip_serializing_if_is_none)]
    pub billing_address: Option<AddressDto>,
    pub payment_method: PaymentMethodDto,
    pub payment_status: PaymentStatusDto,
    #[oai(skip_serializing_if_is_none)]
    pub tracking_number: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id.to_string(),
            items: order.items.into_iter().map(|i| i.into()).collect(),
            subtotal: order.subtotal,
            shipping: order.shipping,
            tax: order.tax,
            total: order.total,
            status: order.status.into(),
            shipping_address: order.shipping_address.into(),
            billing_address: order.billing_address.map(|a| a.into()),
            payment_method: order.payment_method.into(),
            payment_status: order.payment_status.into(),
            tracking_number: order.tracking_number,
            notes: order.notes,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
