use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;

pub type ConnectionPool = Pool<Sqlite>;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(connection_string: &str, max_conn: u32) -> anyhow::Result<ConnectionPool> {
        let options = SqliteConnectOptions::from_str(connection_string)
            .map_err(|err| anyhow::anyhow!("Invalid database url: {err}"))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_conn)
            .connect_with(options)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {err}"))?;

        Ok(pool)
    }
}
