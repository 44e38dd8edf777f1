use crate::{abstract_trait::customer::CustomerQueryRepositoryTrait, model::customer::Customer};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

#[derive(Clone)]
pub struct CustomerQueryRepository {
    db: ConnectionPool,
}

impl CustomerQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerQueryRepositoryTrait for CustomerQueryRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let customers = sqlx::query_as::<_, Customer>("SELECT id, name FROM customers")
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch customers: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(customers)
    }

    async fn find_by_id(&self, id: &str) -> Result<Customer, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>("SELECT id, name FROM customers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch customer {id}: {e:?}");
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)?;

        Ok(customer)
    }
}
