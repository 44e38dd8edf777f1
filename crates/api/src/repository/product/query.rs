use crate::{abstract_trait::product::ProductQueryRepositoryTrait, model::product::Product};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>("SELECT id, name, price FROM products")
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(products)
    }

    async fn find_by_id(&self, id: &str) -> Result<Product, RepositoryError> {
        let product =
            sqlx::query_as::<_, Product>("SELECT id, name, price FROM products WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.db)
                .await
                .map_err(|e| {
                    error!("❌ Failed to fetch product {id}: {e:?}");
                    RepositoryError::from(e)
                })?
                .ok_or(RepositoryError::NotFound)?;

        Ok(product)
    }
}
