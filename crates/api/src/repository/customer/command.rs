use crate::{
    abstract_trait::customer::CustomerCommandRepositoryTrait,
    domain::requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct CustomerCommandRepository {
    db: ConnectionPool,
}

impl CustomerCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerCommandRepositoryTrait for CustomerCommandRepository {
    async fn create_customer(&self, req: &CreateCustomerRequest) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO customers (id, name) VALUES (?, ?)")
            .bind(&req.id)
            .bind(&req.name)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to create customer {}: {e:?}", req.id);
                RepositoryError::from(e)
            })?;

        info!("✅ Created customer {}", req.id);
        Ok(())
    }

    async fn update_customer(&self, req: &UpdateCustomerRequest) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE customers SET name = ? WHERE id = ?")
            .bind(&req.name)
            .bind(&req.id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to update customer {}: {e:?}", req.id);
                RepositoryError::from(e)
            })?;

        info!("🔄 Updated customer {}", req.id);
        Ok(())
    }

    async fn delete_customer(&self, id: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete customer {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        info!("🗑️ Deleted customer {id}");
        Ok(())
    }
}
