use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use business::domain::cart::model::CartItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::CartItemEntity;
use crate::db::{map_sqlx_error, to_column};

const COLUMNS: &str = "id, user_id, product_id, quantity, unit_price, created_at, updated_at";

const UPSERT: &str = r#"INSERT INTO cart_items (id, user_id, product_id, quantity, unit_price, created_at, updated_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
    ON CONFLICT (id) DO UPDATE SET
        quantity = EXCLUDED.quantity,
        updated_at = EXCLUDED.updated_at"#;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_in(
        tx: &mut Transaction<'_, Postgres>,
        item: &CartItem,
    ) -> Result<(), RepositoryError> {
        sqlx::query(UPSERT)
            .bind(item.id)
            .bind(item.user_id.as_str())
            .bind(item.product_id)
            .bind(to_column(item.quantity))
            .bind(item.unit_price)
            .bind(item.created_at)
            .bind(item.updated_at)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<CartItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartItemEntity>(&format!(
            "SELECT {COLUMNS} FROM cart_items WHERE user_id = $1 ORDER BY created_at"
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<CartItem, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(&format!(
            "SELECT {COLUMNS} FROM cart_items WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_product_id(
        &self,
        product_id: Uuid,
        user_id: &UserId,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(&format!(
            "SELECT {COLUMNS} FROM cart_items WHERE product_id = $1 AND user_id = $2"
        ))
        .bind(product_id)
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, item: &CartItem) -> Result<(), RepositoryError> {
        sqlx::query(UPSERT)
            .bind(item.id)
            .bind(item.user_id.as_str())
            .bind(item.product_id)
            .bind(to_column(item.quantity))
            .bind(item.unit_price)
            .bind(item.created_at)
            .bind(item.updated_at)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn replace_all(
        &self,
        user_id: &UserId,
        items: &[CartItem],
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        for item in items {
            Self::insert_in(&mut tx, item).await?;
        }

        tx.commit().await.map_err(map_sqlx_error)
    }
}
