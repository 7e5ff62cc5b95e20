use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::errors::ProductError;

pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub image: String,
    pub images: Vec<String>,
    /// Slug of the owning category.
    pub category: String,
    pub description: String,
    pub rating: f64,
    pub review_count: u32,
    pub in_stock: bool,
    pub stock: Option<u32>,
    pub is_best_seller: bool,
    pub is_new: bool,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied product fields, i.e. everything but the id and timestamps.
#[derive(Debug, Clone)]
pub struct ProductProps {
    pub name: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub image: String,
    pub images: Vec<String>,
    pub category: String,
    pub description: String,
    pub rating: f64,
    pub review_count: u32,
    pub in_stock: bool,
    pub stock: Option<u32>,
    pub is_best_seller: bool,
    pub is_new: bool,
    pub features: Vec<String>,
    pub tags: Vec<String>,
}

/// Partial update; `None` keeps the current value.
#[derive(Debug, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub original_price: Option<Decimal>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub in_stock: Option<bool>,
    pub stock: Option<u32>,
    pub is_best_seller: Option<bool>,
    pub is_new: Option<bool>,
    pub features: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

impl ProductProps {
    fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(ProductError::PriceNegative);
        }
        if self
            .original_price
            .is_some_and(|p| p.is_sign_negative() && !p.is_zero())
        {
            return Err(ProductError::PriceNegative);
        }
        if self.category.trim().is_empty() {
            return Err(ProductError::CategoryEmpty);
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(ProductError::RatingOutOfRange);
        }
        Ok(())
    }
}

impl Product {
    pub fn new(props: ProductProps) -> Result<Self, ProductError> {
        props.validate()?;

        let now = Utc::now();
        Ok(Self::from_repository(Uuid::new_v4(), props, now, now))
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        props: ProductProps,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        // A counted stock of zero always means sold out
        let in_stock = props.in_stock && props.stock != Some(0);

        Self {
            id,
            name: props.name,
            price: props.price,
            original_price: props.original_price,
            image: props.image,
            images: props.images,
            category: props.category,
            description: props.description,
            rating: props.rating,
            review_count: props.review_count,
            in_stock,
            stock: props.stock,
            is_best_seller: props.is_best_seller,
            is_new: props.is_new,
            features: props.features,
            tags: props.tags,
            created_at,
            updated_at,
        }
    }

    pub fn props(&self) -> ProductProps {
        ProductProps {
            name: self.name.clone(),
            price: self.price,
            original_price: self.original_price,
            image: self.image.clone(),
            images: self.images.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            rating: self.rating,
            review_count: self.review_count,
            in_stock: self.in_stock,
            stock: self.stock,
            is_best_seller: self.is_best_seller,
            is_new: self.is_new,
            features: self.features.clone(),
            tags: self.tags.clone(),
        }
    }

    pub fn apply(self, changes: ProductChanges) -> Result<Self, ProductError> {
        let current = self.props();
        let stock = changes.stock.or(current.stock);
        // Restocking a sold-out product puts it back on sale unless the flag is sent explicitly
        let in_stock = match (changes.in_stock, changes.stock) {
            (Some(flag), _) => flag,
            (None, Some(count)) if count > 0 => true,
            (None, _) => current.in_stock,
        };

        let props = ProductProps {
            name: changes.name.unwrap_or(current.name),
            price: changes.price.unwrap_or(current.price),
            original_price: changes.original_price.or(current.original_price),
            image: changes.image.unwrap_or(current.image),
            images: changes.images.unwrap_or(current.images),
            category: changes.category.unwrap_or(current.category),
            description: changes.description.unwrap_or(current.description),
            rating: changes.rating.unwrap_or(current.rating),
            review_count: changes.review_count.unwrap_or(current.review_count),
            in_stock,
            stock,
            is_best_seller: changes.is_best_seller.unwrap_or(current.is_best_seller),
            is_new: changes.is_new.unwrap_or(current.is_new),
            features: changes.features.unwrap_or(current.features),
            tags: changes.tags.unwrap_or(current.tags),
        };
        props.validate()?;

        Ok(Self::from_repository(
            self.id,
            props,
            self.created_at,
            Utc::now(),
        ))
    }

    /// Whether `quantity` units can be sold right now.
    pub fn can_supply(&self, quantity: u32) -> bool {
        self.in_stock && self.stock.is_none_or(|available| available >= quantity)
    }
}
