use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;

use business::domain::order::pricing::ShippingPolicy;

fn decimal_or(raw: Option<String>, name: &str, default: Decimal) -> anyhow::Result<Decimal> {
    match raw {
        Some(value) => {
            let parsed = Decimal::from_str(value.trim())
                .map_err(|e| anyhow::anyhow!("{name} must be a decimal number: {e}"))?;
            if parsed.is_sign_negative() {
                anyhow::bail!("{name} cannot be negative");
            }
            Ok(parsed)
        }
        None => Ok(default),
    }
}

/// Shipping and tax rules used at checkout
///
/// Environment variables:
/// - FREE_SHIPPING_THRESHOLD: subtotal from which shipping is free (default: 200.00)
/// - SHIPPING_FEE: flat fee below the threshold (default: 30.00)
/// - TAX_RATE: fraction of the subtotal charged as tax (default: 0)
pub fn shipping_policy_from_env() -> anyhow::Result<ShippingPolicy> {
    let defaults = ShippingPolicy::default();
    Ok(ShippingPolicy {
        free_shipping_threshold: decimal_or(
            env::var("FREE_SHIPPING_THRESHOLD").ok(),
            "FREE_SHIPPING_THRESHOLD",
            defaults.free_shipping_threshold,
        )?,
        flat_fee: decimal_or(
            env::var("SHIPPING_FEE").ok(),
            "SHIPPING_FEE",
            defaults.flat_fee,
        )?,
        tax_rate: decimal_or(env::var("TAX_RATE").ok(), "TAX_RATE", defaults.tax_rate)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_when_unset() {
        assert_eq!(
            decimal_or(None, "SHIPPING_FEE", Decimal::from(30)).unwrap(),
            Decimal::from(30)
        );
    }

    #[test]
    fn should_parse_configured_value() {
        assert_eq!(
            decimal_or(Some(" 149.90 ".to_string()), "FREE_SHIPPING_THRESHOLD", Decimal::ZERO)
                .unwrap(),
            Decimal::new(14990, 2)
        );
    }

    #[test]
    fn should_reject_malformed_and_negative_values() {
        assert!(decimal_or(Some("abc".to_string()), "TAX_RATE", Decimal::ZERO).is_err());
        assert!(decimal_or(Some("-1".to_string()), "TAX_RATE", Decimal::ZERO).is_err());
    }
}
