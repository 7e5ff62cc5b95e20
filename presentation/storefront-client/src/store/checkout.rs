use business::domain::order::pricing::{OrderTotals, ShippingPolicy};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Address, CartItem, CreateOrderRequest, OrderLine, PaymentMethod};

const COUNTRY: &str = "Brasil";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckoutStep {
    PersonalData,
    Address,
    Payment,
    Review,
}

impl CheckoutStep {
    fn next(self) -> Self {
        match self {
            CheckoutStep::PersonalData => CheckoutStep::Address,
            CheckoutStep::Address => CheckoutStep::Payment,
            CheckoutStep::Payment | CheckoutStep::Review => CheckoutStep::Review,
        }
    }

    fn previous(self) -> Self {
        match self {
            CheckoutStep::PersonalData | CheckoutStep::Address => CheckoutStep::PersonalData,
            CheckoutStep::Payment => CheckoutStep::Address,
            CheckoutStep::Review => CheckoutStep::Payment,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("checkout.missing_field: {0}")]
    MissingField(&'static str),
    #[error("checkout.invalid_email")]
    InvalidEmail,
    #[error("checkout.invalid_phone")]
    InvalidPhone,
    #[error("checkout.invalid_cpf")]
    InvalidCpf,
    #[error("checkout.invalid_zip_code")]
    InvalidZipCode,
    #[error("checkout.invalid_state")]
    InvalidState,
    #[error("checkout.not_at_review")]
    NotAtReview,
    #[error("checkout.cart_empty")]
    CartEmpty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingForm {
    pub zip_code: String,
    pub street: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

/// Form state of the four-step checkout.
///
/// `advance` validates the current step before moving on; `back` never does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDraft {
    step: CheckoutStep,
    pub personal: PersonalData,
    pub shipping: ShippingForm,
    pub payment_method: Option<PaymentMethod>,
    pub notes: String,
}

impl Default for CheckoutDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutDraft {
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::PersonalData,
            personal: PersonalData::default(),
            shipping: ShippingForm::default(),
            payment_method: None,
            notes: String::new(),
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn advance(&mut self) -> Result<CheckoutStep, CheckoutError> {
        self.validate_step(self.step)?;
        self.step = self.step.next();
        Ok(self.step)
    }

    pub fn back(&mut self) -> CheckoutStep {
        self.step = self.step.previous();
        self.step
    }

    pub fn validate_step(&self, step: CheckoutStep) -> Result<(), CheckoutError> {
        match step {
            CheckoutStep::PersonalData => self.validate_personal(),
            CheckoutStep::Address => self.validate_shipping(),
            CheckoutStep::Payment => self
                .payment_method
                .map(|_| ())
                .ok_or(CheckoutError::MissingField("paymentMethod")),
            CheckoutStep::Review => Ok(()),
        }
    }

    fn validate_personal(&self) -> Result<(), CheckoutError> {
        let p = &self.personal;
        required("name", &p.name)?;
        required("email", &p.email)?;
        required("phone", &p.phone)?;
        required("cpf", &p.cpf)?;

        if !looks_like_email(&p.email) {
            return Err(CheckoutError::InvalidEmail);
        }
        if !matches!(digits(&p.phone).len(), 10 | 11) {
            return Err(CheckoutError::InvalidPhone);
        }
        if !is_valid_cpf(&p.cpf) {
            return Err(CheckoutError::InvalidCpf);
        }
        Ok(())
    }

    fn validate_shipping(&self) -> Result<(), CheckoutError> {
        let s = &self.shipping;
        required("zipCode", &s.zip_code)?;
        required("street", &s.street)?;
        required("number", &s.number)?;
        required("neighborhood", &s.neighborhood)?;
        required("city", &s.city)?;
        required("state", &s.state)?;

        if digits(&s.zip_code).len() != 8 {
            return Err(CheckoutError::InvalidZipCode);
        }
        let state = s.state.trim();
        if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CheckoutError::InvalidState);
        }
        Ok(())
    }

    fn shipping_address(&self) -> Address {
        let s = &self.shipping;
        let complement = s.complement.trim();
        Address {
            street: s.street.trim().to_string(),
            number: s.number.trim().to_string(),
            complement: (!complement.is_empty()).then(|| complement.to_string()),
            neighborhood: s.neighborhood.trim().to_string(),
            city: s.city.trim().to_string(),
            state: s.state.trim().to_uppercase(),
            zip_code: s.zip_code.trim().to_string(),
            country: COUNTRY.to_string(),
        }
    }

    /// Order request for the cart snapshot; only available on the review step.
    pub fn build_order(&self, cart: &[CartItem]) -> Result<CreateOrderRequest, CheckoutError> {
        if self.step != CheckoutStep::Review {
            return Err(CheckoutError::NotAtReview);
        }
        if cart.is_empty() {
            return Err(CheckoutError::CartEmpty);
        }
        let payment_method = self
            .payment_method
            .ok_or(CheckoutError::MissingField("paymentMethod"))?;
        let notes = self.notes.trim();

        Ok(CreateOrderRequest {
            items: cart
                .iter()
                .map(|item| OrderLine {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
            shipping_address: self.shipping_address(),
            billing_address: None,
            payment_method,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }

    /// Totals shown on the review step. The server recomputes them from catalog prices.
    pub fn estimate(&self, cart: &[CartItem], policy: &ShippingPolicy) -> OrderTotals {
        let subtotal: Decimal = cart.iter().map(CartItem::line_total).sum();
        policy.quote(subtotal)
    }
}

fn required(field: &'static str, value: &str) -> Result<(), CheckoutError> {
    if value.trim().is_empty() {
        Err(CheckoutError::MissingField(field))
    } else {
        Ok(())
    }
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn looks_like_email(value: &str) -> bool {
    match value.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// Eleven digits with both verifier digits matching.
fn is_valid_cpf(value: &str) -> bool {
    let numbers: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();
    if numbers.len() != 11 || numbers.iter().all(|d| *d == numbers[0]) {
        return false;
    }

    let check = |len: usize| -> u32 {
        let sum: u32 = numbers[..len]
            .iter()
            .enumerate()
            .map(|(i, d)| d * (len as u32 + 1 - i as u32))
            .sum();
        let rest = (sum * 10) % 11;
        if rest == 10 { 0 } else { rest }
    };

    check(9) == numbers[9] && check(10) == numbers[10]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::str::FromStr;
    use uuid::Uuid;

    fn filled_draft() -> CheckoutDraft {
        let mut draft = CheckoutDraft::new();
        draft.personal = PersonalData {
            name: "Ana Souza".to_string(),
            email: "ana@mushco.com.br".to_string(),
            phone: "(11) 98765-4321".to_string(),
            cpf: "529.982.247-25".to_string(),
        };
        draft.shipping = ShippingForm {
            zip_code: "01304-001".to_string(),
            street: "Rua Augusta".to_string(),
            number: "1500".to_string(),
            complement: String::new(),
            neighborhood: "Consolação".to_string(),
            city: "São Paulo".to_string(),
            state: "sp".to_string(),
        };
        draft.payment_method = Some(PaymentMethod::Pix);
        draft
    }

    fn cart_line(price: &str, quantity: u32) -> CartItem {
        let price = Decimal::from_str(price).unwrap();
        CartItem {
            id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            quantity,
            price,
            total: price * Decimal::from(quantity),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn should_walk_all_steps_when_fields_are_valid() {
        let mut draft = filled_draft();

        assert_eq!(draft.advance(), Ok(CheckoutStep::Address));
        assert_eq!(draft.advance(), Ok(CheckoutStep::Payment));
        assert_eq!(draft.advance(), Ok(CheckoutStep::Review));
        assert_eq!(draft.advance(), Ok(CheckoutStep::Review));
    }

    #[test]
    fn should_stay_on_step_with_missing_field() {
        let mut draft = filled_draft();
        draft.personal.phone = "  ".to_string();

        assert_eq!(draft.advance(), Err(CheckoutError::MissingField("phone")));
        assert_eq!(draft.step(), CheckoutStep::PersonalData);
    }

    #[test]
    fn should_reject_bad_cpf_and_email() {
        let mut draft = filled_draft();
        draft.personal.cpf = "111.111.111-11".to_string();
        assert_eq!(draft.advance(), Err(CheckoutError::InvalidCpf));

        draft.personal.cpf = "529.982.247-26".to_string();
        assert_eq!(draft.advance(), Err(CheckoutError::InvalidCpf));

        draft.personal.cpf = "52998224725".to_string();
        draft.personal.email = "ana.mushco.com.br".to_string();
        assert_eq!(draft.advance(), Err(CheckoutError::InvalidEmail));
    }

    #[test]
    fn should_validate_address_step() {
        let mut draft = filled_draft();
        draft.advance().unwrap();
        draft.shipping.zip_code = "0130".to_string();

        assert_eq!(draft.advance(), Err(CheckoutError::InvalidZipCode));

        draft.shipping.zip_code = "01304001".to_string();
        draft.shipping.city = String::new();
        assert_eq!(draft.advance(), Err(CheckoutError::MissingField("city")));
    }

    #[test]
    fn should_require_payment_method() {
        let mut draft = filled_draft();
        draft.payment_method = None;
        draft.advance().unwrap();
        draft.advance().unwrap();

        assert_eq!(
            draft.advance(),
            Err(CheckoutError::MissingField("paymentMethod"))
        );
    }

    #[test]
    fn should_go_back_without_validating() {
        let mut draft = filled_draft();
        draft.advance().unwrap();
        draft.personal = PersonalData::default();
        draft.shipping = ShippingForm::default();

        assert_eq!(draft.back(), CheckoutStep::PersonalData);
        assert_eq!(draft.back(), CheckoutStep::PersonalData);
    }

    #[test]
    fn should_build_order_only_from_review() {
        let mut draft = filled_draft();
        let cart = vec![cart_line("100.00", 2)];
        assert_eq!(draft.build_order(&cart), Err(CheckoutError::NotAtReview));

        for _ in 0..3 {
            draft.advance().unwrap();
        }
        let request = draft.build_order(&cart).unwrap();

        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].quantity, 2);
        assert_eq!(request.items[0].product_id, cart[0].product_id);
        assert_eq!(request.shipping_address.state, "SP");
        assert_eq!(request.shipping_address.complement, None);
        assert_eq!(request.shipping_address.country, "Brasil");
        assert_eq!(request.payment_method, PaymentMethod::Pix);
        assert_eq!(request.notes, None);
        assert_eq!(draft.build_order(&[]), Err(CheckoutError::CartEmpty));
    }

    #[test]
    fn should_estimate_free_shipping_at_threshold() {
        let draft = filled_draft();
        let totals = draft.estimate(&[cart_line("100.00", 2)], &ShippingPolicy::default());

        assert_eq!(totals.subtotal, Decimal::from_str("200.00").unwrap());
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::from_str("200.00").unwrap());
    }

    #[test]
    fn should_charge_flat_fee_below_threshold() {
        let draft = filled_draft();
        let totals = draft.estimate(&[cart_line("59.90", 1)], &ShippingPolicy::default());

        assert_eq!(totals.shipping, Decimal::from(30));
        assert_eq!(totals.total, Decimal::from_str("89.90").unwrap());
    }
}
