//! Plugin name derivation
//!
//! A plugin is identified by its distribution name (`datasette-my-feature`).
//! Everything else the generator needs is derived from it:
//! - the importable module name (`datasette_my_feature`)
//! - the entry point key registered with Datasette (`my_feature`)

use anyhow::Result;

/// Prefix Datasette plugin distributions conventionally carry
pub const PLUGIN_PREFIX: &str = "datasette-";

/// Marker removed from the module name to form the entry point key
pub const MODULE_PREFIX: &str = "datasette_";

/// Names derived from a single plugin name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginNames {
    plugin_name: String,
    module_name: String,
    entry_point: String,
}

impl PluginNames {
    /// Derive all names from a plugin name
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let plugin_name = name.into();
        if plugin_name.is_empty() {
            anyhow::bail!("Plugin name must not be empty");
        }

        let module_name = to_module_name(&plugin_name);
        let entry_point = module_name.replace(MODULE_PREFIX, "");

        Ok(Self {
            plugin_name,
            module_name,
            entry_point,
        })
    }

    /// Distribution name as given by the user
    #[must_use]
    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    /// Importable module name, also the package directory name
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Key under `[project.entry-points.datasette]`
    #[must_use]
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    /// Whether the plugin name follows the `datasette-` convention
    #[must_use]
    pub fn has_expected_prefix(&self) -> bool {
        self.plugin_name.starts_with(PLUGIN_PREFIX)
    }

    /// File name of the generated smoke test
    #[must_use]
    pub fn test_file_name(&self) -> String {
        format!("test_{}.py", self.module_name)
    }
}

/// Convert a plugin name to its module form (hyphens become underscores)
#[must_use]
pub fn to_module_name(name: &str) -> String {
    name.replace('-', "_")
}
