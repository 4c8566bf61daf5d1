//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ISLAND_GUIDE_*` environment variables and
//! configuration files, in that order of precedence.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

fn default_fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Settings for the HTTP server and its backing stores.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ISLAND_GUIDE")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Directory holding the content fixtures.
    pub fixtures_dir: Option<PathBuf>,
    /// PostgreSQL URL for the gateway; in-memory stores are used when unset.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub db_pool_size: Option<u32>,
    /// Seconds a request waits for a pooled connection.
    pub db_checkout_timeout_secs: Option<u64>,
    /// Skip applying embedded migrations at startup.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl ServerSettings {
    /// Host and port to bind, with defaults applied.
    pub fn bind_address(&self) -> (String, u16) {
        (
            self.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Configured fixtures directory, falling back to `backend/fixtures`.
    pub fn fixtures_dir(&self) -> PathBuf {
        self.fixtures_dir.clone().unwrap_or_else(default_fixtures_dir)
    }

    /// Pool configuration when a non-blank database URL is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref().map(str::trim).filter(|u| !u.is_empty())?;
        let mut config = PoolConfig::new(url);
        if let Some(size) = self.db_pool_size {
            config = config.with_max_size(size);
        }
        if let Some(secs) = self.db_checkout_timeout_secs {
            config = config.with_checkout_timeout(Duration::from_secs(secs));
        }
        Some(config)
    }

    /// Whether embedded migrations run before the pool is built.
    pub fn run_migrations(&self) -> bool {
        !self.skip_migrations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "ISLAND_GUIDE_HOST",
        "ISLAND_GUIDE_PORT",
        "ISLAND_GUIDE_FIXTURES_DIR",
        "ISLAND_GUIDE_DATABASE_URL",
        "ISLAND_GUIDE_DB_POOL_SIZE",
        "ISLAND_GUIDE_DB_CHECKOUT_TIMEOUT_SECS",
        "ISLAND_GUIDE_SKIP_MIGRATIONS",
    ];

    /// Every variable unset except `overrides`.
    fn env_with(overrides: &[(&str, &str)]) -> Vec<(&'static str, Option<String>)> {
        VARS.iter()
            .map(|var| {
                let value = overrides
                    .iter()
                    .find(|(name, _)| name == var)
                    .map(|(_, value)| (*value).to_owned());
                (*var, value)
            })
            .collect()
    }

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("island-guide")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(env_with(&[]));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_address(), ("0.0.0.0".to_owned(), 8080));
        assert_eq!(settings.fixtures_dir(), default_fixtures_dir());
        assert!(settings.pool_config().is_none());
        assert!(settings.run_migrations());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env(env_with(&[
            ("ISLAND_GUIDE_PORT", "9090"),
            ("ISLAND_GUIDE_FIXTURES_DIR", "/srv/amrum"),
            ("ISLAND_GUIDE_DATABASE_URL", "postgres://guide:secret@db/amrum"),
            ("ISLAND_GUIDE_SKIP_MIGRATIONS", "true"),
        ]));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_address().1, 9090);
        assert_eq!(settings.fixtures_dir(), PathBuf::from("/srv/amrum"));
        let pool = settings.pool_config().expect("database configured");
        assert_eq!(pool.database_url(), "postgres://guide:secret@db/amrum");
        assert!(!settings.run_migrations());
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env(env_with(&[("ISLAND_GUIDE_DATABASE_URL", "  ")]));

        assert!(load_from_empty_args().pool_config().is_none());
    }
}
