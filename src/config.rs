//! Configuration for the bot process
//!
//! Loaded exclusively from environment variables (with `.env` support via
//! dotenvy, loaded by the binary before this module runs). Secrets are never
//! hard-coded.

use std::env;
use std::path::PathBuf;

use reqwest::Url;

use crate::error::{Error, Result};

/// Environment variable holding the bot token.
pub const TOKEN_ENV: &str = "HEROES_BOT_TOKEN";

/// Default mini-application URL (override via MINIAPP_URL).
pub const DEFAULT_MINIAPP_URL: &str = "https://heroibelarus.github.io/miniapp/";

/// Default dataset file names inside the data directory.
pub const HEROES_FILE_NAME: &str = "heroes.json";
pub const FACTS_FILE_NAME: &str = "facts.json";

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub heroes_file: PathBuf,
    pub facts_file: PathBuf,
    pub miniapp_url: Url,
}

impl Config {
    /// Build configuration from the environment.
    ///
    /// Fails when the bot token is missing or the mini-app URL override does
    /// not parse, so startup aborts before any handler is registered.
    pub fn from_env() -> Result<Self> {
        let token = env::var(TOKEN_ENV)
            .map_err(|_| Error::Config(format!("{} not set in environment (.env)", TOKEN_ENV)))?;
        if token.trim().is_empty() {
            return Err(Error::Config(format!("{} is empty", TOKEN_ENV)));
        }

        let heroes_file = env::var("HEROES_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir().join(HEROES_FILE_NAME));
        let facts_file = env::var("FACTS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir().join(FACTS_FILE_NAME));

        let miniapp_url =
            env::var("MINIAPP_URL").unwrap_or_else(|_| DEFAULT_MINIAPP_URL.to_string());
        let miniapp_url = Url::parse(&miniapp_url)
            .map_err(|e| Error::Config(format!("Invalid MINIAPP_URL '{}': {}", miniapp_url, e)))?;

        Ok(Self {
            token,
            heroes_file,
            facts_file,
            miniapp_url,
        })
    }
}

/// Path to the dataset directory.
pub fn data_dir() -> PathBuf {
    // Ищем data/ относительно текущей директории или родительской
    let candidates = [PathBuf::from("data"), PathBuf::from("../data")];

    for path in candidates {
        if path.exists() {
            return path;
        }
    }

    // Fallback
    PathBuf::from("data")
}
