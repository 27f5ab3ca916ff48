use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub session_store: SessionStoreConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

/// Location of the on-disk key-value store holding the saved session.
#[derive(Debug, Clone)]
pub struct SessionStoreConfig {
    pub path: PathBuf,
}

/// Where exported spreadsheets are written.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            api: ApiConfig::from_env()?,
            session_store: SessionStoreConfig::from_env()?,
            export: ExportConfig::from_env()?,
        })
    }
}

impl ApiConfig {
    const DEFAULT_BASE_URL: &'static str = "http://localhost:5000/api";
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());

        let request_timeout_secs = env::var("API_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "API_REQUEST_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            base_url,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

impl SessionStoreConfig {
    const DEFAULT_PATH: &'static str = ".luct-session.json";

    pub fn from_env() -> Result<Self, String> {
        let path = env::var("SESSION_STORE_PATH").unwrap_or_else(|_| Self::DEFAULT_PATH.to_string());

        Ok(Self {
            path: PathBuf::from(path),
        })
    }
}

impl ExportConfig {
    pub fn from_env() -> Result<Self, String> {
        let dir = env::var("EXPORT_DIR").unwrap_or_else(|_| ".".to_string());

        Ok(Self {
            dir: PathBuf::from(dir),
        })
    }
}
