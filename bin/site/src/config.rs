//! Centralized server configuration.
//!
//! Loaded via the `config` crate from `MAGMIST_*` environment variables.
//! Every field has a default, so the server starts with no environment set.
//! Bind address and site root come from Leptos options instead.

use serde::Deserialize;

const ENV_PREFIX: &str = "MAGMIST";

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Directory served under `/pkg`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Directory served under `/assets` (photos, demo video).
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

fn default_log_filter() -> String {
    "info,tower_http=debug".to_string()
}

fn default_static_dir() -> String {
    "target/site/pkg".to_string()
}

fn default_assets_dir() -> String {
    "target/site/assets".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            static_dir: default_static_dir(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// `MAGMIST_STATIC_DIR=dist/pkg` sets `static_dir`, and so on.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_uses_defaults() {
        let config: ServerConfig = config::Config::builder()
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");
        assert_eq!(config.log_filter, "info,tower_http=debug");
        assert_eq!(config.static_dir, "target/site/pkg");
        assert_eq!(config.assets_dir, "target/site/assets");
    }

    #[test]
    fn overrides_apply_per_field() {
        let config: ServerConfig = config::Config::builder()
            .set_override("static_dir", "dist/pkg")
            .expect("override")
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");
        assert_eq!(config.static_dir, "dist/pkg");
        assert_eq!(config.log_filter, default_log_filter());
    }
}
