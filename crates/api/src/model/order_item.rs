use crate::model::product::Product;
use sqlx::FromRow;

#[derive(Debug, Clone)]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub product: Product,
    pub quantity: i64,
    pub price: f64,
}

/// Flat row produced by the order_items × products join.
#[derive(Debug, Clone, FromRow)]
pub struct OrderItemRecord {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub quantity: i64,
    pub price: f64,
    pub product_name: String,
    pub product_price: f64,
}

impl OrderItemRecord {
    pub fn into_order_item(self) -> OrderItem {
        OrderItem {
            product: Product {
                id: self.product_id.clone(),
                name: self.product_name,
                price: self.product_price,
            },
            id: self.id,
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
            price: self.price,
        }
    }
}
