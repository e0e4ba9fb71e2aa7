use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};

/// Where items and their comps are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Sqlite,
    Memory,
}

impl FromStr for StoreKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StoreKind::Sqlite),
            "memory" => Ok(StoreKind::Memory),
            other => Err(anyhow!("'{}' is not one of sqlite, memory", other)),
        }
    }
}

/// Which provider answers comp searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompsSource {
    Demo,
    Google,
}

impl FromStr for CompsSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(CompsSource::Demo),
            "google" => Ok(CompsSource::Google),
            other => Err(anyhow!("'{}' is not one of demo, google", other)),
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub store: StoreKind,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub comps_source: CompsSource,
    pub comps_limit: usize,
    pub google_api_key: Option<String>,
    pub google_cx: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let setting =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let listen_addr: SocketAddr = setting("FF_LISTEN_ADDR", "0.0.0.0:8000")
            .parse()
            .context("Invalid FF_LISTEN_ADDR")?;
        let store: StoreKind = setting("FF_STORE", "sqlite")
            .parse()
            .context("Invalid FF_STORE")?;
        let db_path = setting("FF_DB_PATH", "./db/furnflip.db");
        let cors_allow = setting("FF_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = setting("FF_REQUEST_TIMEOUT_MS", "30000")
            .trim()
            .parse()
            .context("Invalid FF_REQUEST_TIMEOUT_MS")?;
        let comps_source: CompsSource = setting("FF_COMPS_SOURCE", "demo")
            .parse()
            .context("Invalid FF_COMPS_SOURCE")?;
        let comps_limit: usize = setting("FF_COMPS_LIMIT", "10")
            .trim()
            .parse()
            .context("Invalid FF_COMPS_LIMIT")?;

        Ok(Self {
            listen_addr,
            store,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            comps_source,
            comps_limit,
            google_api_key: lookup("GOOGLE_API_KEY"),
            google_cx: lookup("GOOGLE_CX"),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            store: StoreKind::Sqlite,
            db_path: "./db/furnflip.db".to_string(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            comps_source: CompsSource::Demo,
            comps_limit: 10,
            google_api_key: None,
            google_cx: None,
        }
    }
}
