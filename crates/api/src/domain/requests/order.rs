use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Line item as submitted on a write. An embedded `product` object in the
/// payload is accepted and ignored; only `product_id` is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItemPayload {
    #[validate(length(min = 1, message = "Order item ID is required"))]
    #[schema(example = "oi1")]
    pub id: String,

    /// Ignored on writes; the parent order's id always wins.
    #[serde(default)]
    pub order_id: String,

    #[validate(length(min = 1, message = "Product ID is required"))]
    #[schema(example = "p1")]
    pub product_id: String,

    #[validate(range(min = 0, message = "Quantity must be non-negative"))]
    #[schema(example = 2)]
    pub quantity: i64,

    #[schema(example = 10.0)]
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Order ID is required"))]
    #[schema(example = "1")]
    pub id: String,

    #[serde(default)]
    #[schema(example = "2024-01-01")]
    pub order_date: String,

    #[validate(length(min = 1, message = "Customer ID is required"))]
    #[schema(example = "c1")]
    pub customer_id: String,

    #[serde(default)]
    #[validate(nested)]
    pub order_items: Vec<OrderItemPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    /// Overwritten by the handler with the path id.
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    #[schema(example = "2024-01-02")]
    pub order_date: String,

    #[validate(length(min = 1, message = "Customer ID is required"))]
    #[schema(example = "c1")]
    pub customer_id: String,

    #[serde(default)]
    #[validate(nested)]
    pub order_items: Vec<OrderItemPayload>,
}
