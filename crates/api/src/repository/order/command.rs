use crate::{
    abstract_trait::order::OrderCommandRepositoryTrait,
    domain::requests::order::{CreateOrderRequest, UpdateOrderRequest},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

/// Write side of the order aggregate. Every operation brackets its
/// parent+child statements in one transaction; dropping the transaction
/// guard on an early return rolls the whole unit back.
#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        sqlx::query("INSERT INTO orders (id, customer_id, order_date) VALUES (?, ?, ?)")
            .bind(&req.id)
            .bind(&req.customer_id)
            .bind(&req.order_date)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert order {}: {e:?}", req.id);
                RepositoryError::from(e)
            })?;

        for item in &req.order_items {
            // order_id comes from the parent, whatever the payload carried
            sqlx::query(
                r#"
                INSERT INTO order_items (id, order_id, product_id, quantity, price)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(&item.id)
            .bind(&req.id)
            .bind(&item.product_id)
            .bind(item.quantity)
            .bind(item.price)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to insert order item {} for order {}: {e:?}",
                    item.id, req.id
                );
                RepositoryError::from(e)
            })?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order {} with {} items",
            req.id,
            req.order_items.len()
        );
        Ok(())
    }

    async fn update_order(&self, req: &UpdateOrderRequest) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Zero affected rows is fine: the caller owns knowing the order exists.
        sqlx::query("UPDATE orders SET customer_id = ?, order_date = ? WHERE id = ?")
            .bind(&req.customer_id)
            .bind(&req.order_date)
            .bind(&req.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to update order {}: {e:?}", req.id);
                RepositoryError::from(e)
            })?;

        // Full replace: drop the prior item set, re-insert the submitted one.
        sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(&req.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to clear items for order {}: {e:?}", req.id);
                RepositoryError::from(e)
            })?;

        for item in &req.order_items {
            sqlx::query(
                r#"
                INSERT INTO order_items (id, order_id, product_id, quantity, price)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(&item.id)
            .bind(&req.id)
            .bind(&item.product_id)
            .bind(item.quantity)
            .bind(item.price)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to insert order item {} for order {}: {e:?}",
                    item.id, req.id
                );
                RepositoryError::from(e)
            })?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "🔄 Updated order {} with {} items",
            req.id,
            req.order_items.len()
        );
        Ok(())
    }

    async fn delete_order(&self, id: &str) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete items for order {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        // Deleting a nonexistent order is a no-op, not an error.
        sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete order {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🗑️ Deleted order {id}");
        Ok(())
    }
}
