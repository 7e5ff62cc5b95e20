use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CategoryError;
use super::value_objects::Slug;

#[derive(Debug, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: Slug,
    pub image: Option<String>,
    pub description: String,
    pub is_active: bool,
    pub display_order: i32,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewCategoryProps {
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub description: String,
    pub is_active: bool,
    pub display_order: i32,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

/// Partial update; `None` keeps the current value.
#[derive(Default)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl Category {
    pub fn new(props: NewCategoryProps) -> Result<Self, CategoryError> {
        if props.name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }
        let slug = Slug::parse(&props.slug)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            slug,
            image: props.image,
            description: props.description,
            is_active: props.is_active,
            display_order: props.display_order,
            seo_title: props.seo_title,
            seo_description: props.seo_description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        slug: Slug,
        image: Option<String>,
        description: String,
        is_active: bool,
        display_order: i32,
        seo_title: Option<String>,
        seo_description: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            slug,
            image,
            description,
            is_active,
            display_order,
            seo_title,
            seo_description,
            created_at,
            updated_at,
        }
    }

    pub fn apply(self, changes: CategoryChanges) -> Result<Self, CategoryError> {
        let name = match changes.name {
            Some(n) if n.trim().is_empty() => return Err(CategoryError::NameEmpty),
            Some(n) => n,
            None => self.name,
        };
        let slug = match changes.slug {
            Some(s) => Slug::parse(&s)?,
            None => self.slug,
        };

        Ok(Self {
            id: self.id,
            name,
            slug,
            image: changes.image.or(self.image),
            description: changes.description.unwrap_or(self.description),
            is_active: changes.is_active.unwrap_or(self.is_active),
            display_order: changes.display_order.unwrap_or(self.display_order),
            seo_title: changes.seo_title.or(self.seo_title),
            seo_description: changes.seo_description.or(self.seo_description),
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }
}
