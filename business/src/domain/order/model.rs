use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::errors::OrderError;
use super::pricing::{OrderTotals, ShippingPolicy};
use super::value_objects::{Address, OrderStatus, PaymentMethod, PaymentStatus};
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

/// Catalog data frozen at order time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total: Decimal,
}

impl OrderItem {
    pub fn snapshot(product: &Product, quantity: u32) -> Result<Self, OrderError> {
        if quantity == 0 {
            return Err(OrderError::QuantityNotPositive);
        }
        Ok(Self {
            product_id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            quantity,
            unit_price: product.price,
            total: product.price * Decimal::from(quantity),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub shipping_address: Address,
    pub billing_address: Option<Address>,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub tracking_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewOrderProps {
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub shipping_address: Address,
    pub billing_address: Option<Address>,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

impl Order {
    pub fn new(props: NewOrderProps, policy: &ShippingPolicy) -> Result<Self, OrderError> {
        if props.items.is_empty() {
            return Err(OrderError::ItemsEmpty);
        }
        if props.items.iter().any(|item| item.quantity == 0) {
            return Err(OrderError::QuantityNotPositive);
        }
        if !props.shipping_address.is_complete() {
            return Err(OrderError::ShippingAddressIncomplete);
        }
        if props
            .billing_address
            .as_ref()
            .is_some_and(|address| !address.is_complete())
        {
            return Err(OrderError::BillingAddressIncomplete);
        }

        let subtotal: Decimal = props.items.iter().map(|item| item.total).sum();
        let OrderTotals {
            subtotal,
            shipping,
            tax,
            total,
        } = policy.quote(subtotal);

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            items: props.items,
            subtotal,
            shipping,
            tax,
            total,
            status: OrderStatus::Pending,
            shipping_address: props.shipping_address,
            billing_address: props.billing_address,
            payment_method: props.payment_method,
            payment_status: PaymentStatus::Pending,
            tracking_number: None,
            notes: props.notes.filter(|n| !n.trim().is_empty()),
            created_at: now,
            updated_at: now,
        })
    }

    /// Moves the order to `next`, rejecting backward moves and changes to terminal orders.
    pub fn transition_to(
        self,
        next: OrderStatus,
        tracking_number: Option<String>,
    ) -> Result<Self, OrderError> {
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidStatusTransition);
        }
        Ok(Self {
            status: next,
            tracking_number: tracking_number.or(self.tracking_number),
            updated_at: Utc::now(),
            ..self
        })
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductProps;
    use std::str::FromStr;

    fn address() -> Address {
        Address {
            street: "Rua Augusta".to_string(),
            number: "1500".to_string(),
            complement: Some("Apto 12".to_string()),
            neighborhood: "Consolação".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            zip_code: "01304-001".to_string(),
            country: "Brasil".to_string(),
        }
    }

    fn product(price: &str) -> Product {
        Product::new(ProductProps {
            name: "Vaporizador Portátil".to_string(),
            price: Decimal::from_str(price).unwrap(),
            original_price: None,
            image: "/images/vaporizador.jpg".to_string(),
            images: vec![],
            category: "vaporizadores".to_string(),
            description: String::new(),
            rating: 4.6,
            review_count: 58,
            in_stock: true,
            stock: None,
            is_best_seller: false,
            is_new: true,
            features: vec![],
            tags: vec![],
        })
        .unwrap()
    }

    fn props(items: Vec<OrderItem>) -> NewOrderProps {
        NewOrderProps {
            user_id: UserId::new("uid-1"),
            items,
            shipping_address: address(),
            billing_address: None,
            payment_method: PaymentMethod::Pix,
            notes: None,
        }
    }

    #[test]
    fn should_snapshot_catalog_data() {
        let catalog = product("100.00");

        let item = OrderItem::snapshot(&catalog, 2).unwrap();

        assert_eq!(item.name, "Vaporizador Portátil");
        assert_eq!(item.total, Decimal::from_str("200.00").unwrap());
    }

    #[test]
    fn should_ship_free_for_two_items_of_one_hundred() {
        let item = OrderItem::snapshot(&product("100.00"), 2).unwrap();

        let order = Order::new(props(vec![item]), &ShippingPolicy::default()).unwrap();

        assert_eq!(order.subtotal, Decimal::from_str("200.00").unwrap());
        assert_eq!(order.shipping, Decimal::ZERO);
        assert_eq!(order.total, Decimal::from_str("200.00").unwrap());
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn should_charge_flat_fee_below_threshold() {
        let item = OrderItem::snapshot(&product("49.90"), 1).unwrap();

        let order = Order::new(props(vec![item]), &ShippingPolicy::default()).unwrap();

        assert_eq!(order.shipping, Decimal::from(30));
        assert_eq!(order.total, Decimal::from_str("79.90").unwrap());
    }

    #[test]
    fn should_reject_empty_items() {
        let result = Order::new(props(vec![]), &ShippingPolicy::default());
        assert!(matches!(result, Err(OrderError::ItemsEmpty)));
    }

    #[test]
    fn should_reject_incomplete_shipping_address() {
        let item = OrderItem::snapshot(&product("10.00"), 1).unwrap();
        let mut props = props(vec![item]);
        props.shipping_address.zip_code = String::new();

        let result = Order::new(props, &ShippingPolicy::default());

        assert!(matches!(result, Err(OrderError::ShippingAddressIncomplete)));
    }

    #[test]
    fn should_reject_incomplete_billing_address() {
        let item = OrderItem::snapshot(&product("10.00"), 1).unwrap();
        let mut props = props(vec![item]);
        let mut billing = address();
        billing.street = " ".to_string();
        props.billing_address = Some(billing);

        let result = Order::new(props, &ShippingPolicy::default());

        assert!(matches!(result, Err(OrderError::BillingAddressIncomplete)));
    }

    #[test]
    fn should_track_shipment_on_transition() {
        let item = OrderItem::snapshot(&product("10.00"), 1).unwrap();
        let order = Order::new(props(vec![item]), &ShippingPolicy::default()).unwrap();

        let shipped = order
            .transition_to(OrderStatus::Shipped, Some("BR123456789".to_string()))
            .unwrap();

        assert_eq!(shipped.status, OrderStatus::Shipped);
        assert_eq!(shipped.tracking_number.as_deref(), Some("BR123456789"));
        assert!(matches!(
            shipped.transition_to(OrderStatus::Confirmed, None),
            Err(OrderError::InvalidStatusTransition)
        ));
    }
}
