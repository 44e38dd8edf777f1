use crate::{
    abstract_trait::product::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO products (id, name, price) VALUES (?, ?, ?)")
            .bind(&req.id)
            .bind(&req.name)
            .bind(req.price)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to create product {}: {e:?}", req.id);
                RepositoryError::from(e)
            })?;

        info!("✅ Created product {}", req.id);
        Ok(())
    }

    async fn update_product(&self, req: &UpdateProductRequest) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(&req.name)
            .bind(req.price)
            .bind(&req.id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to update product {}: {e:?}", req.id);
                RepositoryError::from(e)
            })?;

        info!("🔄 Updated product {}", req.id);
        Ok(())
    }

    async fn delete_product(&self, id: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        info!("🗑️ Deleted product {id}");
        Ok(())
    }
}
