use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};

pub const DEFAULT_LOG_FILTER: &str = "nc_news=debug,tower_http=debug";

/// Process configuration, read from the environment (and `.env` if present).
///
/// | Env Var        | Default     |
/// |----------------|-------------|
/// | `DATABASE_URL` | (required)  |
/// | `HOST`         | `127.0.0.1` |
/// | `PORT`         | `9090`      |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let host = std::env::var("HOST")
            .unwrap_or_else(|_| "127.0.0.1".into())
            .parse()
            .context("HOST must be an IP address")?;

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "9090".into())
            .parse()
            .context("PORT must be a valid u16")?;

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
