use crate::error::{AppError, ConfigError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let pg_host = std::env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
        let pg_port = std::env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
        let pg_db = std::env::var("POSTGRES_DB")
            .map_err(|_| ConfigError::MissingEnvVar("POSTGRES_DB".to_string()))?;
        let pg_user = std::env::var("POSTGRES_USER")
            .map_err(|_| ConfigError::MissingEnvVar("POSTGRES_USER".to_string()))?;
        let pg_password = std::env::var("POSTGRES_PASSWORD")
            .map_err(|_| ConfigError::MissingEnvVar("POSTGRES_PASSWORD".to_string()))?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: format!(
                "postgres://{}:{}@{}:{}/{}",
                pg_user, pg_password, pg_host, pg_port, pg_db
            ),
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
        })
    }
}
