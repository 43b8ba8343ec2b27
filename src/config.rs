use crate::error::{Error, Result};
use dotenvy::dotenv;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database: DatabaseConfig,
    pub cloudinary: Option<CloudinaryConfig>,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub name: String,
    pub require_ssl: bool,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let server_address = match env::var("SERVER_ADDRESS") {
            Ok(addr) if !addr.trim().is_empty() => addr,
            _ => format!("0.0.0.0:{}", get_env_or("PORT", "3001")),
        };

        let log_format = match get_env_or("LOG_FORMAT", "pretty").to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            other => {
                return Err(Error::Config(format!("Invalid value for LOG_FORMAT: {}", other)))
            }
        };

        Ok(Self {
            server_address,
            database: DatabaseConfig::from_env()?,
            cloudinary: CloudinaryConfig::from_env(),
            log_format,
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self> {
        let url = env::var("DATABASE_URL")
            .ok()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        let require_ssl = get_env_or("PGSSLMODE", "") == "require"
            || url
                .as_deref()
                .map(|u| u.contains("sslmode=require"))
                .unwrap_or(false);

        Ok(Self {
            url,
            host: get_env_or("PGHOST", "localhost"),
            port: get_env_parse_or("PGPORT", 5432)?,
            user: get_env_or("PGUSER", "postgres"),
            password: env::var("PGPASSWORD").ok(),
            name: get_env_or("PGDATABASE", "postgres"),
            require_ssl,
            max_connections: get_env_parse_or("DB_MAX_CONNECTIONS", 10)?,
            acquire_timeout_secs: get_env_parse_or("DB_ACQUIRE_TIMEOUT_SECS", 30)?,
        })
    }

    /// A full `DATABASE_URL` wins over the discrete `PG*` variables.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        let mut options = match &self.url {
            Some(url) => PgConnectOptions::from_str(url)
                .map_err(|e| Error::Config(format!("Invalid DATABASE_URL: {}", e)))?,
            None => {
                let options = PgConnectOptions::new()
                    .host(&self.host)
                    .port(self.port)
                    .username(&self.user)
                    .database(&self.name);
                match &self.password {
                    Some(password) => options.password(password),
                    None => options,
                }
            }
        };
        if self.require_ssl {
            options = options.ssl_mode(PgSslMode::Require);
        }
        Ok(options)
    }
}

impl CloudinaryConfig {
    fn from_env() -> Option<Self> {
        let cloud_name = env::var("CLOUDINARY_CLOUD_NAME").ok()?;
        let api_key = env::var("CLOUDINARY_API_KEY").ok()?;
        let api_secret = env::var("CLOUDINARY_API_SECRET").ok()?;
        if cloud_name.trim().is_empty() || api_key.trim().is_empty() || api_secret.is_empty() {
            return None;
        }
        Some(Self {
            cloud_name,
            api_key,
            api_secret,
        })
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discrete() -> DatabaseConfig {
        DatabaseConfig {
            url: None,
            host: "db.internal".into(),
            port: 6543,
            user: "bolsa".into(),
            password: Some("secret".into()),
            name: "bolsa_laboral".into(),
            require_ssl: false,
            max_connections: 5,
            acquire_timeout_secs: 5,
        }
    }

    #[test]
    fn discrete_variables_build_connect_options() {
        let options = discrete().connect_options().expect("options");
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "bolsa");
        assert_eq!(options.get_database(), Some("bolsa_laboral"));
    }

    #[test]
    fn database_url_takes_precedence() {
        let mut config = discrete();
        config.url = Some("postgres://app:pw@pg.example.com:5433/jobs".into());
        let options = config.connect_options().expect("options");
        assert_eq!(options.get_host(), "pg.example.com");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("jobs"));
    }

    #[test]
    fn invalid_database_url_is_a_config_error() {
        let mut config = discrete();
        config.url = Some("not a url".into());
        assert!(matches!(config.connect_options(), Err(Error::Config(_))));
    }
}
