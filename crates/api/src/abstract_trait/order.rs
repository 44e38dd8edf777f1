use crate::{
    domain::requests::order::{CreateOrderRequest, UpdateOrderRequest},
    model::order::Order,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Order, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<(), RepositoryError>;
    async fn update_order(&self, req: &UpdateOrderRequest) -> Result<(), RepositoryError>;
    async fn delete_order(&self, id: &str) -> Result<(), RepositoryError>;
}
