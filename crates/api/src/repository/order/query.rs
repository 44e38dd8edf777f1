use crate::{
    abstract_trait::order::OrderQueryRepositoryTrait,
    model::{
        order::{Order, OrderRecord},
        order_item::OrderItemRecord,
    },
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use std::collections::HashMap;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// Group flat child rows into their parent orders.
///
/// Parents keep the row order of the first query; items keep the row order
/// of the second. An item whose order_id matches no loaded order is dropped
/// from the result, with a warning so the data-integrity gap is visible.
fn assemble_orders(order_rows: Vec<OrderRecord>, item_rows: Vec<OrderItemRecord>) -> Vec<Order> {
    let mut orders: Vec<Order> = order_rows.into_iter().map(OrderRecord::into_order).collect();

    let index: HashMap<String, usize> = orders
        .iter()
        .enumerate()
        .map(|(pos, order)| (order.id.clone(), pos))
        .collect();

    for row in item_rows {
        match index.get(&row.order_id) {
            Some(&pos) => orders[pos].order_items.push(row.into_order_item()),
            None => {
                warn!(
                    "⚠️ Dropping order item {} referencing unknown order {}",
                    row.id, row.order_id
                );
            }
        }
    }

    orders
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        info!("📦 Fetching all orders");

        let order_rows = sqlx::query_as::<_, OrderRecord>(
            r#"
            SELECT o.id, o.customer_id, o.order_date,
                   c.name AS customer_name
            FROM orders o
            INNER JOIN customers c ON o.customer_id = c.id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {e:?}");
            RepositoryError::from(e)
        })?;

        let item_rows = sqlx::query_as::<_, OrderItemRecord>(
            r#"
            SELECT oi.id, oi.order_id, oi.product_id, oi.quantity, oi.price,
                   p.name AS product_name, p.price AS product_price
            FROM order_items oi
            INNER JOIN products p ON oi.product_id = p.id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order items: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(assemble_orders(order_rows, item_rows))
    }

    async fn find_by_id(&self, id: &str) -> Result<Order, RepositoryError> {
        info!("📦 Fetching order {id}");

        let order_row = sqlx::query_as::<_, OrderRecord>(
            r#"
            SELECT o.id, o.customer_id, o.order_date,
                   c.name AS customer_name
            FROM orders o
            INNER JOIN customers c ON o.customer_id = c.id
            WHERE o.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order {id}: {e:?}");
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        let item_rows = sqlx::query_as::<_, OrderItemRecord>(
            r#"
            SELECT oi.id, oi.order_id, oi.product_id, oi.quantity, oi.price,
                   p.name AS product_name, p.price AS product_price
            FROM order_items oi
            INNER JOIN products p ON oi.product_id = p.id
            WHERE oi.order_id = ?
            "#,
        )
        .bind(id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order items for order {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        let mut order = order_row.into_order();
        order.order_items = item_rows
            .into_iter()
            .map(OrderItemRecord::into_order_item)
            .collect();

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_row(id: &str, customer_id: &str) -> OrderRecord {
        OrderRecord {
            id: id.into(),
            customer_id: customer_id.into(),
            order_date: "2024-01-01".into(),
            customer_name: "Test Customer".into(),
        }
    }

    fn item_row(id: &str, order_id: &str) -> OrderItemRecord {
        OrderItemRecord {
            id: id.into(),
            order_id: order_id.into(),
            product_id: "p1".into(),
            quantity: 1,
            price: 10.0,
            product_name: "Test Product".into(),
            product_price: 9.99,
        }
    }

    #[test]
    fn items_attach_to_their_own_order() {
        let orders = assemble_orders(
            vec![order_row("1", "c1"), order_row("2", "c1")],
            vec![item_row("a", "1"), item_row("b", "2"), item_row("c", "1")],
        );

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, "1");
        assert_eq!(orders[0].order_items.len(), 2);
        assert_eq!(orders[0].order_items[0].id, "a");
        assert_eq!(orders[0].order_items[1].id, "c");
        assert_eq!(orders[1].order_items.len(), 1);
        assert_eq!(orders[1].order_items[0].id, "b");
    }

    #[test]
    fn parent_row_order_is_preserved() {
        let orders = assemble_orders(
            vec![order_row("z", "c1"), order_row("a", "c1"), order_row("m", "c1")],
            vec![],
        );

        let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn orphaned_items_are_dropped() {
        let orders = assemble_orders(
            vec![order_row("1", "c1")],
            vec![item_row("a", "1"), item_row("ghost", "nope")],
        );

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_items.len(), 1);
        assert_eq!(orders[0].order_items[0].id, "a");
    }

    #[test]
    fn order_without_items_has_empty_collection() {
        let orders = assemble_orders(vec![order_row("1", "c1")], vec![]);

        assert_eq!(orders.len(), 1);
        assert!(orders[0].order_items.is_empty());
    }

    #[test]
    fn customer_snapshot_is_populated_from_join() {
        let orders = assemble_orders(vec![order_row("1", "c1")], vec![item_row("a", "1")]);

        assert_eq!(orders[0].customer.id, "c1");
        assert_eq!(orders[0].customer.name, "Test Customer");
        assert_eq!(orders[0].order_items[0].product.name, "Test Product");
        assert_eq!(orders[0].order_items[0].product.price, 9.99);
    }
}
