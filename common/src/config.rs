//! Process-wide configuration for the seeder binaries.
//!
//! Values come from the environment (a `.env` file is honoured). Every field
//! has a default, so the binaries run against a local MongoDB with no setup.

use once_cell::sync::OnceCell;
use std::{env, fs};

pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE_NAME: &str = "sky";
pub const DEFAULT_COLLECTION_NAME: &str = "metrics";

#[derive(Debug, Clone)]
pub struct Config {
    /// Reported to the server as the client's application name.
    pub project_name: String,
    pub log_level: String,
    /// Empty means stdout only.
    pub log_file: String,
    pub database_url: String,
    pub database_name: String,
    pub collection_name: String,
    /// Fixed seed for the ingestion RNG, for reproducible runs.
    pub ingest_seed: Option<u64>,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Reads the configuration from the current process environment.
    pub fn from_env() -> Self {
        let project_name = env::var("PROJECT_NAME").unwrap_or_else(|_| "sky-seeder".into());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
        let log_file = env::var("LOG_FILE").unwrap_or_default();
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let database_name =
            env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.into());
        let collection_name =
            env::var("COLLECTION_NAME").unwrap_or_else(|_| DEFAULT_COLLECTION_NAME.into());
        let ingest_seed = env::var("INGEST_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok());

        Config {
            project_name,
            log_level,
            log_file,
            database_url,
            database_name,
            collection_name,
            ingest_seed,
        }
    }

    /// Loads `env_path` (if present) and initializes the global config once.
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(|| {
            let config = Config::from_env();
            if !config.log_file.is_empty() {
                if let Some(parent) = std::path::Path::new(&config.log_file).parent() {
                    fs::create_dir_all(parent).ok();
                }
            }
            config
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "PROJECT_NAME",
        "LOG_LEVEL",
        "LOG_FILE",
        "DATABASE_URL",
        "DATABASE_NAME",
        "COLLECTION_NAME",
        "INGEST_SEED",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn defaults_target_local_sky_metrics() {
        clear_env();
        let config = Config::from_env();

        assert_eq!(config.project_name, "sky-seeder");
        assert_eq!(config.database_url, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "sky");
        assert_eq!(config.collection_name, "metrics");
        assert_eq!(config.log_level, "info");
        assert!(config.log_file.is_empty());
        assert_eq!(config.ingest_seed, None);
    }

    #[test]
    #[serial]
    fn overrides_are_read_from_env() {
        clear_env();
        env::set_var("PROJECT_NAME", "sky-demo");
        env::set_var("DATABASE_URL", "mongodb://db:27017");
        env::set_var("DATABASE_NAME", "other");
        env::set_var("INGEST_SEED", "42");

        let config = Config::from_env();
        assert_eq!(config.project_name, "sky-demo");
        assert_eq!(config.database_url, "mongodb://db:27017");
        assert_eq!(config.database_name, "other");
        assert_eq!(config.ingest_seed, Some(42));

        clear_env();
    }

    #[test]
    #[serial]
    fn unparsable_seed_is_ignored() {
        clear_env();
        env::set_var("INGEST_SEED", "not-a-number");

        assert_eq!(Config::from_env().ingest_seed, None);

        clear_env();
    }
}
