use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::shared::value_objects::UserId;

/// One cart line. The unit price is captured when the product is first added.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub id: Uuid,
    pub user_id: UserId,
    pub product_id: Uuid,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartItem {
    pub fn new(
        user_id: UserId,
        product_id: Uuid,
        quantity: u32,
        unit_price: Decimal,
    ) -> Result<Self, CartError> {
        if quantity == 0 {
            return Err(CartError::QuantityNotPositive);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            product_id,
            quantity,
            unit_price,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        product_id: Uuid,
        quantity: u32,
        unit_price: Decimal,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            product_id,
            quantity,
            unit_price,
            created_at,
            updated_at,
        }
    }

    pub fn with_quantity(self, quantity: u32) -> Result<Self, CartError> {
        if quantity == 0 {
            return Err(CartError::QuantityNotPositive);
        }
        Ok(Self {
            quantity,
            updated_at: Utc::now(),
            ..self
        })
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Sum of all line totals; zero for an empty cart.
pub fn cart_subtotal(items: &[CartItem]) -> Decimal {
    items.iter().map(CartItem::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(cents: i64, quantity: u32) -> CartItem {
        CartItem::new(
            UserId::new("uid-1"),
            Uuid::new_v4(),
            quantity,
            Decimal::new(cents, 2),
        )
        .unwrap()
    }

    #[test]
    fn should_reject_zero_quantity() {
        let result = CartItem::new(UserId::new("uid-1"), Uuid::new_v4(), 0, Decimal::ONE);
        assert!(matches!(result, Err(CartError::QuantityNotPositive)));
    }

    #[test]
    fn should_multiply_unit_price_by_quantity() {
        assert_eq!(item(10_000, 2).line_total(), Decimal::new(20_000, 2));
    }

    #[test]
    fn should_keep_identity_when_quantity_changes() {
        let original = item(4_990, 1);
        let id = original.id;

        let changed = original.with_quantity(3).unwrap();

        assert_eq!(changed.id, id);
        assert_eq!(changed.quantity, 3);
        assert!(changed.clone().with_quantity(0).is_err());
    }

    #[test]
    fn should_total_empty_cart_as_zero() {
        assert_eq!(cart_subtotal(&[]), Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn subtotal_equals_sum_of_price_times_quantity(
            lines in prop::collection::vec((0i64..1_000_000, 1u32..50), 0..20)
        ) {
            let items: Vec<CartItem> = lines.iter().map(|(c, q)| item(*c, *q)).collect();
            let expected: i64 = lines.iter().map(|(c, q)| c * i64::from(*q)).sum();

            prop_assert_eq!(cart_subtotal(&items), Decimal::new(expected, 2));
        }
    }
}
