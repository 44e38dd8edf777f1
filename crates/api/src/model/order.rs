use crate::model::{customer::Customer, order_item::OrderItem};
use sqlx::FromRow;

/// An order together with its owned line items, treated as one
/// consistency unit. The embedded customer is a read-side snapshot
/// populated from the join; it is never persisted separately.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    pub order_date: String,
    pub customer_id: String,
    pub customer: Customer,
    pub order_items: Vec<OrderItem>,
}

/// Flat row produced by the orders × customers join.
#[derive(Debug, Clone, FromRow)]
pub struct OrderRecord {
    pub id: String,
    pub customer_id: String,
    pub order_date: String,
    pub customer_name: String,
}

impl OrderRecord {
    /// Lift the flat row into the aggregate shape with an empty item list.
    pub fn into_order(self) -> Order {
        Order {
            customer: Customer {
                id: self.customer_id.clone(),
                name: self.customer_name,
            },
            id: self.id,
            order_date: self.order_date,
            customer_id: self.customer_id,
            order_items: Vec::new(),
        }
    }
}
