use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_conn: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_max_conn: u32 = std::env::var("DB_MAX_CONNECTION")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MAX_CONNECTION as u32")?;

        Ok(Self {
            database_url,
            port,
            db_max_conn,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_requires_database_url() {
        unsafe { std::env::remove_var("DATABASE_URL") };
        assert!(Config::init().is_err());

        unsafe { std::env::set_var("DATABASE_URL", "sqlite::memory:") };
        let config = Config::init().expect("config with defaults");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_max_conn, 5);
        unsafe { std::env::remove_var("DATABASE_URL") };
    }
}
