use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::category::model::Category;
use business::domain::category::value_objects::Slug;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub description: String,
    pub is_active: bool,
    pub display_order: i32,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category::from_repository(
            self.id,
            self.name,
            Slug::from_repository(self.slug),
            self.image,
            self.description,
            self.is_active,
            self.display_order,
            self.seo_title,
            self.seo_description,
            self.created_at,
            self.updated_at,
        )
    }
}
