use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::{Product, ProductProps};

use crate::db::to_count;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub image: String,
    pub images: Vec<String>,
    pub category: String,
    pub description: String,
    pub rating: f64,
    pub review_count: i32,
    pub in_stock: bool,
    pub stock: Option<i32>,
    pub is_best_seller: bool,
    pub is_new: bool,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            ProductProps {
                name: self.name,
                price: self.price,
                original_price: self.original_price,
                image: self.image,
                images: self.images,
                category: self.category,
                description: self.description,
                rating: self.rating,
                review_count: to_count(self.review_count),
                in_stock: self.in_stock,
                stock: self.stock.map(to_count),
                is_best_seller: self.is_best_seller,
                is_new: self.is_new,
                features: self.features,
                tags: self.tags,
            },
            self.created_at,
            self.updated_at,
        )
    }
}
