use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderItem};
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::{OrderEntity, OrderItemEntity};
use crate::db::{map_sqlx_error, to_column};

const COLUMNS: &str = "id, user_id, subtotal, shipping, tax, total, status, shipping_address, billing_address, payment_method, payment_status, tracking_number, notes, created_at, updated_at";

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads the line items of `order_ids`, grouped per order in position order.
    async fn load_items(
        &self,
        order_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<OrderItem>>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderItemEntity>(
            "SELECT order_id, position, product_id, name, image, quantity, unit_price, total FROM order_items WHERE order_id = ANY($1) ORDER BY order_id, position",
        )
        .bind(order_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let mut grouped: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.order_id)
                .or_default()
                .push(row.into_domain());
        }
        Ok(grouped)
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let ids: Vec<Uuid> = entities.iter().map(|e| e.id).collect();
        let mut items = self.load_items(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|e| {
                let lines = items.remove(&e.id).unwrap_or_default();
                e.into_domain(lines)
            })
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        let lines = self
            .load_items(&[id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        Ok(entity.into_domain(lines))
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query(
            r#"INSERT INTO orders (id, user_id, subtotal, shipping, tax, total, status, shipping_address, billing_address, payment_method, payment_status, tracking_number, notes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status,
                payment_status = EXCLUDED.payment_status,
                tracking_number = EXCLUDED.tracking_number,
                notes = EXCLUDED.notes,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(order.id)
        .bind(order.user_id.as_str())
        .bind(order.subtotal)
        .bind(order.shipping)
        .bind(order.tax)
        .bind(order.total)
        .bind(order.status.to_string())
        .bind(Json(&order.shipping_address))
        .bind(order.billing_address.as_ref().map(Json))
        .bind(order.payment_method.to_string())
        .bind(order.payment_status.to_string())
        .bind(&order.tracking_number)
        .bind(&order.notes)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        // Line items never change after creation
        for (position, item) in order.items.iter().enumerate() {
            sqlx::query(
                r#"INSERT INTO order_items (order_id, position, product_id, name, image, quantity, unit_price, total)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (order_id, position) DO NOTHING"#,
            )
            .bind(order.id)
            .bind(i32::try_from(position).unwrap_or(i32::MAX))
            .bind(item.product_id)
            .bind(&item.name)
            .bind(&item.image)
            .bind(to_column(item.quantity))
            .bind(item.unit_price)
            .bind(item.total)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        }

        tx.commit().await.map_err(map_sqlx_error)
    }
}
