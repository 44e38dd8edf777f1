use crate::{
    domain::response::{customer::CustomerResponse, product::ProductResponse},
    model::{order::Order, order_item::OrderItem},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: String,
    pub order_date: String,
    pub customer_id: String,
    pub customer: CustomerResponse,
    pub order_items: Vec<OrderItemResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub product: ProductResponse,
    pub quantity: i64,
    pub price: f64,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.id,
            order_date: value.order_date,
            customer_id: value.customer_id,
            customer: value.customer.into(),
            order_items: value
                .order_items
                .into_iter()
                .map(OrderItemResponse::from)
                .collect(),
        }
    }
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            id: value.id,
            order_id: value.order_id,
            product_id: value.product_id,
            product: value.product.into(),
            quantity: value.quantity,
            price: value.price,
        }
    }
}
