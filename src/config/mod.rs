use std::env;

use lazy_static::lazy_static;
use sqlx::postgres::PgConnectOptions;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            db_host: env::var("PGHOST").unwrap_or_else(|_| "localhost".to_string()),
            db_port: env::var("PGPORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .expect("PGPORT must be a valid number"),
            db_user: env::var("PGUSER").unwrap_or_else(|_| "postgres".to_string()),
            db_password: env::var("PGPASSWORD").unwrap_or_default(),
            db_name: env::var("PGDBNAME").unwrap_or_else(|_| "fish".to_string()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("DB_MAX_CONNECTIONS must be a valid number"),
        }
    }

    /// Connection options for the PostgreSQL pool.
    ///
    /// Credentials are passed field by field, so passwords never need URL escaping.
    pub fn pg_connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }
}
