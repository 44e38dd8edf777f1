use crate::model::customer::Customer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        CustomerResponse {
            id: value.id,
            name: value.name,
        }
    }
}
