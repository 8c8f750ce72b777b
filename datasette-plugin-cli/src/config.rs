//! Scaffold configuration
//!
//! Values substituted into the generated project metadata. Sources are merged
//! with clear precedence:
//!
//! 1. Command-line flags (highest priority, applied by the caller)
//! 2. Environment variables (`DATASETTE_PLUGIN_` prefix)
//! 3. File passed with `--config`
//! 4. `~/.config/datasette-plugin/config.toml` (user config, XDG)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! author_name = "Jane Doe"
//! author_email = "jane@example.com"
//! description = "Adds a map view to Datasette"
//! ```

use anyhow::Context;
use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "DATASETTE_PLUGIN_";

/// Values written into `pyproject.toml` and the module docstring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// One-line project description
    #[serde(deserialize_with = "scalar_string")]
    pub description: String,

    /// Author listed in `[project].authors`
    #[serde(deserialize_with = "scalar_string")]
    pub author_name: String,

    /// Author email listed in `[project].authors`
    #[serde(deserialize_with = "scalar_string")]
    pub author_email: String,
}

/// Accept any scalar as text
///
/// Environment values are parsed, so `DATASETTE_PLUGIN_DESCRIPTION=42`
/// arrives as a number.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string, found {other}"
        ))),
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            description: "A Datasette plugin".to_string(),
            author_name: "Your Name".to_string(),
            author_email: "you@example.com".to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration from the user config file, an optional explicit
    /// file, and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The explicit config file does not exist
    /// - A configuration file contains invalid TOML or mistyped values
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let user_config = Self::recommended_path();
        let user_config = user_config.exists().then_some(user_config);
        Self::load_layers(user_config.as_deref(), explicit)
    }

    /// Merge defaults, the given files, and the environment
    ///
    /// # Errors
    ///
    /// See [`ScaffoldConfig::load`].
    pub fn load_layers(user: Option<&Path>, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        if let Some(path) = user {
            tracing::debug!(path = %path.display(), "loading user config");
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = explicit {
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        figment
            .extract()
            .context("Failed to load scaffold configuration")
    }

    /// Get the recommended XDG config path
    ///
    /// Returns `~/.config/datasette-plugin/config.toml` on Linux.
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./datasette-plugin.toml"),
            |config_dir| config_dir.join("datasette-plugin").join("config.toml"),
        )
    }

    /// Apply command-line overrides on top of the loaded values
    #[must_use]
    pub fn with_overrides(
        mut self,
        description: Option<String>,
        author_name: Option<String>,
        author_email: Option<String>,
    ) -> Self {
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(author_name) = author_name {
            self.author_name = author_name;
        }
        if let Some(author_email) = author_email {
            self.author_email = author_email;
        }
        self
    }
}
