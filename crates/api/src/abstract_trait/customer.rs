use crate::{
    domain::requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
    model::customer::Customer,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCustomerQueryRepository = Arc<dyn CustomerQueryRepositoryTrait + Send + Sync>;
pub type DynCustomerCommandRepository = Arc<dyn CustomerCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Customer, RepositoryError>;
}

#[async_trait]
pub trait CustomerCommandRepositoryTrait {
    async fn create_customer(&self, req: &CreateCustomerRequest) -> Result<(), RepositoryError>;
    async fn update_customer(&self, req: &UpdateCustomerRequest) -> Result<(), RepositoryError>;
    async fn delete_customer(&self, id: &str) -> Result<(), RepositoryError>;
}
