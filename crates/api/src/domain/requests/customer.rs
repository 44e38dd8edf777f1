use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "Customer ID is required"))]
    #[schema(example = "c1")]
    pub id: String,

    #[validate(length(min = 1, message = "Customer name is required"))]
    #[schema(example = "Test Customer")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerRequest {
    /// Overwritten by the handler with the path id.
    #[serde(default)]
    pub id: String,

    #[validate(length(min = 1, message = "Customer name is required"))]
    #[schema(example = "Test Customer")]
    pub name: String,
}
