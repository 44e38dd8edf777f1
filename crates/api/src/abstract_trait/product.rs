use crate::{
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Product, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<(), RepositoryError>;
    async fn update_product(&self, req: &UpdateProductRequest) -> Result<(), RepositoryError>;
    async fn delete_product(&self, id: &str) -> Result<(), RepositoryError>;
}
