use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::category::model::{Category, CategoryChanges, NewCategoryProps};

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    /// Lowercase letters, digits and hyphens; unique among active categories
    pub slug: String,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    #[oai(default)]
    pub description: String,
    #[oai(default = "default_active")]
    pub is_active: bool,
    #[oai(default)]
    pub display_order: i32,
    #[oai(skip_serializing_if_is_none)]
    pub seo_title: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub seo_description: Option<String>,
}

impl From<CreateCategoryRequest> for NewCategoryProps {
    fn from(body: CreateCategoryRequest) -> Self {
        Self {
            name: body.name,
            slug: body.slug,
            image: body.image,
            description: body.description,
            is_active: body.is_active,
            display_order: body.display_order,
            seo_title: body.seo_title,
            seo_description: body.seo_description,
        }
    }
}

#[derive(Debug, Clone, Object, Default)]
#[oai(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl From<UpdateCategoryRequest> for CategoryChanges {
    fn from(body: UpdateCategoryRequest) -> Self {
        Self {
            name: body.name,
            slug: body.slug,
            image: body.image,
            description: body.description,
            is_active: body.is_active,
            display_order: body.display_order,
            seo_title: body.seo_title,
            seo_description: body.seo_description,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    pub description: String,
    pub is_active: bool,
    pub display_order: i32,
    #[oai(skip_serializing_if_is_none)]
    pub seo_title: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub seo_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug.to_string(),
            image: category.image,
            description: category.description,
            is_active: category.is_active,
            display_order: category.display_order,
            seo_title: category.seo_title,
            seo_description: category.seo_description,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
