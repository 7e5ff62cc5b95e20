use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::favorite::model::Favorite;
use business::domain::favorite::repository::FavoriteRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::FavoriteEntity;
use crate::db::map_sqlx_error;

pub struct FavoriteRepositoryPostgres {
    pool: PgPool,
}

impl FavoriteRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Favorite>, RepositoryError> {
        let entities = sqlx::query_as::<_, FavoriteEntity>(
            "SELECT user_id, product_id, created_at FROM favorites WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn exists(&self, user_id: &UserId, product_id: Uuid) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = $1 AND product_id = $2)",
        )
        .bind(user_id.as_str())
        .bind(product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn save(&self, favorite: &Favorite) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO favorites (user_id, product_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, product_id) DO NOTHING"#,
        )
        .bind(favorite.user_id.as_str())
        .bind(favorite.product_id)
        .bind(favorite.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, user_id: &UserId, product_id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND product_id = $2")
            .bind(user_id.as_str())
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
