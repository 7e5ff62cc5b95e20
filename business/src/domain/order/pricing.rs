use rust_decimal::Decimal;

use crate::domain::shared::money::round_cents;

/// Shipping and tax rules applied at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Subtotals at or above this ship for free.
    pub free_shipping_threshold: Decimal,
    pub flat_fee: Decimal,
    /// Fraction of the subtotal, e.g. `0.1` for 10 %.
    pub tax_rate: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Decimal::from(200),
            flat_fee: Decimal::from(30),
            tax_rate: Decimal::ZERO,
        }
    }
}

impl ShippingPolicy {
    pub fn shipping_for(&self, subtotal: Decimal) -> Decimal {
        if subtotal >= self.free_shipping_threshold {
            Decimal::ZERO
        } else {
            self.flat_fee
        }
    }

    pub fn quote(&self, subtotal: Decimal) -> OrderTotals {
        let shipping = self.shipping_for(subtotal);
        let tax = round_cents(subtotal * self.tax_rate);
        OrderTotals {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    #[test]
    fn should_ship_free_at_exact_threshold() {
        let totals = ShippingPolicy::default().quote(Decimal::from_str("200.00").unwrap());

        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::from_str("200.00").unwrap());
    }

    #[test]
    fn should_charge_flat_fee_below_threshold() {
        let totals = ShippingPolicy::default().quote(Decimal::from_str("199.99").unwrap());

        assert_eq!(totals.shipping, Decimal::from(30));
        assert_eq!(totals.total, Decimal::from_str("229.99").unwrap());
    }

    #[test]
    fn should_round_tax_to_cents() {
        let policy = ShippingPolicy {
            tax_rate: Decimal::from_str("0.075").unwrap(),
            ..Default::default()
        };

        let totals = policy.quote(Decimal::from_str("10.10").unwrap());

        // 10.10 * 0.075 = 0.7575
        assert_eq!(totals.tax, Decimal::from_str("0.76").unwrap());
    }

    proptest! {
        #[test]
        fn total_is_always_subtotal_plus_shipping_plus_tax(
            cents in 0i64..10_000_000,
            rate_bp in 0i64..3_000,
        ) {
            let policy = ShippingPolicy {
                tax_rate: Decimal::new(rate_bp, 4),
                ..Default::default()
            };
            let subtotal = Decimal::new(cents, 2);

            let totals = policy.quote(subtotal);

            prop_assert_eq!(totals.total, totals.subtotal + totals.shipping + totals.tax);
            if subtotal >= policy.free_shipping_threshold {
                prop_assert_eq!(totals.shipping, Decimal::ZERO);
            } else {
                prop_assert_eq!(totals.shipping, policy.flat_fee);
            }
        }
    }
}
