use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::category::model::Category;
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;

use super::entity::CategoryEntity;
use crate::db::map_sqlx_error;

const COLUMNS: &str = "id, name, slug, image, description, is_active, display_order, seo_title, seo_description, created_at, updated_at";

pub struct CategoryRepositoryPostgres {
    pool: PgPool,
}

impl CategoryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn get_active(&self) -> Result<Vec<Category>, RepositoryError> {
        let entities = sqlx::query_as::<_, CategoryEntity>(&format!(
            "SELECT {COLUMNS} FROM categories WHERE is_active ORDER BY display_order, name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError> {
        let entity = sqlx::query_as::<_, CategoryEntity>(&format!(
            "SELECT {COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_active_by_slug(&self, slug: &str) -> Result<Option<Category>, RepositoryError> {
        let entity = sqlx::query_as::<_, CategoryEntity>(&format!(
            "SELECT {COLUMNS} FROM categories WHERE slug = $1 AND is_active"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, category: &Category) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO categories (id, name, slug, image, description, is_active, display_order, seo_title, seo_description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                slug = EXCLUDED.slug,
                image = EXCLUDED.image,
                description = EXCLUDED.description,
                is_active = EXCLUDED.is_active,
                display_order = EXCLUDED.display_order,
                seo_title = EXCLUDED.seo_title,
                seo_description = EXCLUDED.seo_description,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(category.slug.as_str())
        .bind(&category.image)
        .bind(&category.description)
        .bind(category.is_active)
        .bind(category.display_order)
        .bind(&category.seo_title)
        .bind(&category.seo_description)
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
