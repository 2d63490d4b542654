use std::{env, path::PathBuf, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
    Database,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "database" | "db" => Ok(StorageBackend::Database),
            other => Err(anyhow::anyhow!("unknown STORAGE_BACKEND {other:?}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage_backend: StorageBackend,
    pub storage_dir: PathBuf,
    pub database_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::File,
        };
        let storage_dir = env::var("STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let database_url = env::var("DATABASE_URL").ok();

        if storage_backend == StorageBackend::Database && database_url.is_none() {
            anyhow::bail!("DATABASE_URL must be set when STORAGE_BACKEND=database");
        }

        Ok(Self {
            host,
            port,
            storage_backend,
            storage_dir,
            database_url,
        })
    }
}
