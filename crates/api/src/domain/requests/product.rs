use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Product ID is required"))]
    #[schema(example = "p1")]
    pub id: String,

    #[validate(length(min = 1, message = "Product name is required"))]
    #[schema(example = "Test Product")]
    pub name: String,

    #[schema(example = 9.99)]
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    /// Overwritten by the handler with the path id.
    #[serde(default)]
    pub id: String,

    #[validate(length(min = 1, message = "Product name is required"))]
    #[schema(example = "Test Product")]
    pub name: String,

    #[schema(example = 10.99)]
    pub price: f64,
}
