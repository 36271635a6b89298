//! Application configuration loaded from environment variables.

use std::env;

/// Credential pair accepted by the stand-in login when none is configured.
pub const DEFAULT_LOGIN_EMAIL: &str = "test@example.com";
pub const DEFAULT_LOGIN_PASSWORD: &str = "password123";

/// Which document store adapter backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Firestore,
    /// In-process store, lost on restart.
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firestore" => Ok(StorageBackend::Firestore),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(ConfigError::Invalid("STORAGE_BACKEND")),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// JWT signing key for viewer tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// Email accepted by the stand-in login
    pub login_email: String,
    /// Password accepted by the stand-in login
    pub login_password: String,
    /// Document store adapter
    pub storage: StorageBackend,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
            login_email: env::var("LOGIN_EMAIL")
                .unwrap_or_else(|_| DEFAULT_LOGIN_EMAIL.to_string()),
            login_password: env::var("LOGIN_PASSWORD")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| DEFAULT_LOGIN_PASSWORD.to_string()),
            storage: match env::var("STORAGE_BACKEND") {
                Ok(raw) => raw.parse()?,
                Err(_) => StorageBackend::Firestore,
            },
        })
    }

    /// Fixed configuration for tests.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
            login_email: DEFAULT_LOGIN_EMAIL.to_string(),
            login_password: DEFAULT_LOGIN_PASSWORD.to_string(),
            storage: StorageBackend::Memory,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
