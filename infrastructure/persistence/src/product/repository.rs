use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductSearchCriteria;
use business::domain::shared::pagination::{Page, PageRequest};

use super::entity::ProductEntity;
use crate::db::{map_sqlx_error, to_column};

const COLUMNS: &str = "id, name, price, original_price, image, images, category, description, rating, review_count, in_stock, stock, is_best_seller, is_new, features, tags, created_at, updated_at";

const SEARCH_FILTER: &str = r#"($1::text IS NULL
        OR name ILIKE $1 ESCAPE '\'
        OR description ILIKE $1 ESCAPE '\'
        OR EXISTS (SELECT 1 FROM unnest(tags) AS tag WHERE tag ILIKE $1 ESCAPE '\'))
    AND ($2::text IS NULL OR category = $2)
    AND ($3::numeric IS NULL OR price >= $3)
    AND ($4::numeric IS NULL OR price <= $4)"#;

/// Wraps a search term into an ILIKE substring pattern, escaping wildcards.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products ORDER BY created_at DESC, name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products WHERE category = $1 ORDER BY created_at DESC, name"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn search(
        &self,
        criteria: &ProductSearchCriteria,
        page: PageRequest,
    ) -> Result<Page<Product>, RepositoryError> {
        let pattern = criteria.normalized_query().map(|q| like_pattern(&q));
        let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM products WHERE {SEARCH_FILTER}"
        ))
        .bind(&pattern)
        .bind(&criteria.category)
        .bind(criteria.min_price)
        .bind(criteria.max_price)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products WHERE {SEARCH_FILTER} ORDER BY created_at DESC, name LIMIT $5 OFFSET $6"
        ))
        .bind(&pattern)
        .bind(&criteria.category)
        .bind(criteria.min_price)
        .bind(criteria.max_price)
        .bind(i64::from(page.limit))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Page::new(
            entities.into_iter().map(|e| e.into_domain()).collect(),
            u64::try_from(total).unwrap_or(0),
            page,
        ))
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, price, original_price, image, images, category, description, rating, review_count, in_stock, stock, is_best_seller, is_new, features, tags, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                price = EXCLUDED.price,
                original_price = EXCLUDED.original_price,
                image = EXCLUDED.image,
                images = EXCLUDED.images,
                category = EXCLUDED.category,
                description = EXCLUDED.description,
                rating = EXCLUDED.rating,
                review_count = EXCLUDED.review_count,
                in_stock = EXCLUDED.in_stock,
                stock = EXCLUDED.stock,
                is_best_seller = EXCLUDED.is_best_seller,
                is_new = EXCLUDED.is_new,
                features = EXCLUDED.features,
                tags = EXCLUDED.tags,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.original_price)
        .bind(&product.image)
        .bind(&product.images)
        .bind(&product.category)
        .bind(&product.description)
        .bind(product.rating)
        .bind(to_column(product.review_count))
        .bind(product.in_stock)
        .bind(product.stock.map(to_column))
        .bind(product.is_best_seller)
        .bind(product.is_new)
        .bind(&product.features)
        .bind(&product.tags)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_query_in_substring_pattern() {
        assert_eq!(like_pattern("vidro"), "%vidro%");
    }

    #[test]
    fn should_escape_like_wildcards() {
        assert_eq!(like_pattern("100%_off"), "%100\\%\\_off%");
    }
}
