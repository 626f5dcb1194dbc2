use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "db.sqlite")
    pub sqlite_path: String,
    /// Path prefix for the item routes (default: none)
    pub api_prefix: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "db.sqlite")
    /// - `API_PREFIX` - Prefix for the item routes, e.g. "/api" (default: none)
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "db.sqlite".to_string()),
            api_prefix: env::var("API_PREFIX").unwrap_or_default(),
        }
    }

    /// The normalized route prefix, or `None` to mount the item routes at the root.
    ///
    /// Leading slashes are added and trailing slashes removed, so `api`,
    /// `/api` and `/api/` all become `/api`.
    pub fn route_prefix(&self) -> Option<String> {
        let trimmed = self.api_prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(format!("/{trimmed}"))
        }
    }
}
