use chrono::{DateTime, Utc};
use poem_openapi::Object;
use rust_decimal::Decimal;
use uuid::Uuid;

use business::domain::product::model::{Product, ProductChanges, ProductProps};
use business::domain::shared::pagination::Page;

fn default_in_stock() -> bool {
    true
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Current price
    pub price: Decimal,
    /// Price before discount
    #[oai(skip_serializing_if_is_none)]
    pub original_price: Option<Decimal>,
    /// Main image URL
    pub image: String,
    /// Gallery image URLs
    #[oai(default)]
    pub images: Vec<String>,
    /// Slug of an active category
    pub category: String,
    #[oai(default)]
    pub description: String,
    /// Average rating between 0 and 5
    #[oai(default)]
    pub rating: f64,
    #[oai(default)]
    pub review_count: u32,
    #[oai(default = "default_in_stock")]
    pub in_stock: bool,
    /// Units available; 0 marks the product out of stock
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<u32>,
    #[oai(default)]
    pub is_best_seller: bool,
    #[oai(default)]
    pub is_new: bool,
    #[oai(default)]
    pub features: Vec<String>,
    #[oai(default)]
    pub tags: Vec<String>,
}

impl From<CreateProductRequest> for ProductProps {
    fn from(body: CreateProductRequest) -> Self {
        Self {
            name: body.name,
            price: body.price,
            original_price: body.original_price,
            image: body.image,
            images: body.images,
            category: body.category,
            description: body.description,
            rating: body.rating,
            review_count: body.review_count,
            in_stock: body.in_stock,
            stock: body.stock,
            is_best_seller: body.is_best_seller,
            is_new: body.is_new,
            features: body.features,
            tags: body.tags,
        }
    }
}

/// Partial update: omitted fields keep their current value.
#[derive(Debug, Clone, Object, Default)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProductRequest {
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

impl From<UpdateProductRequest> for ProductChanges {
    fn from(body: UpdateProductRequest) -> Self {
        Self {
            name: body.name,
            price: body.price,
            original_price: body.original_price,
            image: body.image,
            images: body.images,
            category: body.category,
            description: body.description,
            rating: body.rating,
            review_count: body.review_count,
            in_stock: body.in_stock,
            stock: body.stock,
            is_best_seller: body.is_best_seller,
            is_new: body.is_new,
            features: body.features,
            tags: body.tags,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    #[oai(skip_serializing_if_is_none)]
    pub original_price: Option<Decimal>,
    pub image: String,
    pub images: Vec<String>,
    /// Category slug
    pub category: String,
    pub description: String,
    pub rating: f64,
    pub review_count: u32,
    pub in_stock: bool,
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<u32>,
    pub is_best_seller: bool,
    pub is_new: bool,
    pub features: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            original_price: product.original_price,
            image: product.image,
            images: product.images,
            category: product.category,
            description: product.description,
            rating: product.rating,
            review_count: product.review_count,
            in_stock: product.in_stock,
            stock: product.stock,
            is_best_seller: product.is_best_seller,
            is_new: product.is_new,
            features: product.features,
            tags: product.tags,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductPageResponse {
    pub items: Vec<ProductResponse>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl From<Page<Product>> for ProductPageResponse {
    fn from(page: Page<Product>) -> Self {
        let total_pages = page.total_pages();
        let page = page.map(ProductResponse::from);
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages,
        }
    }
}
