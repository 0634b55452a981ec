use anyhow::{bail, Context, Result};

/// Which expansion policy the engine is built with at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyMode {
    /// Per-language continuous expansion rates (default).
    Profile,
    /// Legacy fixed length tiers; accepts any language code.
    FixedTier,
}

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with a bare
/// environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub default_language: String,
    pub default_category: String,
    pub policy_mode: PolicyMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let policy_mode = match std::env::var("POLICY_MODE").as_deref() {
            Ok("profile") | Err(_) => PolicyMode::Profile,
            Ok("fixed-tier") => PolicyMode::FixedTier,
            Ok(other) => bail!("POLICY_MODE must be 'profile' or 'fixed-tier', got '{other}'"),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_language: std::env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "de".to_string()),
            default_category: std::env::var("DEFAULT_CATEGORY").unwrap_or_else(|_| "ui".to_string()),
            policy_mode,
        })
    }
}
