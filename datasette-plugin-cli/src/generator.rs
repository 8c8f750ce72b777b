//! Plugin project generator
//!
//! Lays out a Datasette plugin project under `<output_dir>/<plugin-name>/`:
//! - `pyproject.toml` with the `datasette` entry point
//! - `README.md`
//! - `<module>/__init__.py` with a hook stub
//! - `tests/__init__.py` and `tests/test_<module>.py`
//! - `pytest.ini` and `.gitignore`
//!
//! Existing files are overwritten. Nothing is rolled back if a write fails
//! part way through.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;
use crate::names::PluginNames;
use crate::templates::PluginTemplate;

/// Result of a successful generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    /// Project root (`<output_dir>/<plugin-name>`)
    pub root: PathBuf,
    /// Directories ensured, root first
    pub directories: Vec<PathBuf>,
    /// Files written, in write order
    pub files: Vec<PathBuf>,
}

/// Datasette plugin project generator
pub struct PluginGenerator {
    template: PluginTemplate,
}

impl PluginGenerator {
    /// Create a generator for the given plugin
    #[must_use]
    pub fn new(names: PluginNames, config: &ScaffoldConfig) -> Self {
        Self {
            template: PluginTemplate::new(names, config),
        }
    }

    /// Names the generator renders for
    #[must_use]
    pub const fn names(&self) -> &PluginNames {
        self.template.names()
    }

    /// Project root for a given output directory
    #[must_use]
    pub fn project_root(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.names().plugin_name())
    }

    /// Generate the project tree
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A directory cannot be created (permissions, a file in the way)
    /// - Template rendering fails
    /// - A file cannot be written
    pub fn generate(&self, output_dir: &Path) -> Result<GeneratedProject> {
        let root = self.project_root(output_dir);
        if root.is_dir() {
            tracing::debug!(root = %root.display(), "project root exists, overwriting files");
        }

        let directories = self.create_structure(&root)?;

        let mut files = Vec::new();
        for file in self.template.files() {
            let path = root.join(&file.relative_path);
            let rendered = self.template.render(&file)?;

            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "wrote file");

            files.push(path);
        }

        tracing::info!(
            root = %root.display(),
            files = files.len(),
            "generated plugin project"
        );

        Ok(GeneratedProject {
            root,
            directories,
            files,
        })
    }

    /// Create directory structure
    fn create_structure(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let dirs = [
            root.to_path_buf(),
            root.join(self.names().module_name()),
            root.join("tests"),
        ];

        for path in &dirs {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "ensured directory");
        }

        Ok(dirs.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn generator(name: &str) -> PluginGenerator {
        PluginGenerator::new(PluginNames::new(name).unwrap(), &ScaffoldConfig::default())
    }

    #[test]
    fn test_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let project = generator("datasette-my-feature")
            .generate(temp_dir.path())
            .unwrap();

        let root = temp_dir.path().join("datasette-my-feature");
        assert_eq!(project.root, root);
        assert!(root.is_dir());
        assert!(root.join("datasette_my_feature").is_dir());
        assert!(root.join("tests").is_dir());
        assert_eq!(project.directories.len(), 3);
    }

    #[test]
    fn test_writes_all_files_inside_root() {
        let temp_dir = TempDir::new().unwrap();
        let project = generator("datasette-my-feature")
            .generate(temp_dir.path())
            .unwrap();

        assert_eq!(project.files.len(), 7);
        for file in &project.files {
            assert!(file.starts_with(&project.root), "outside root: {}", file.display());
            assert!(file.is_file(), "missing: {}", file.display());
        }
    }

    #[test]
    fn test_only_tests_marker_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let project = generator("datasette-my-feature")
            .generate(temp_dir.path())
            .unwrap();

        let marker = project.root.join("tests").join("__init__.py");
        for file in &project.files {
            let len = fs::metadata(file).unwrap().len();
            if *file == marker {
                assert_eq!(len, 0);
            } else {
                assert!(len > 0, "empty: {}", file.display());
            }
        }
    }

    #[test]
    fn test_creates_missing_parents() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("a").join("b");

        let project = generator("datasette-nested").generate(&output_dir).unwrap();
        assert!(project.root.join("pyproject.toml").is_file());
    }

    #[test]
    fn test_file_in_the_way_is_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("datasette-blocked"), "not a directory").unwrap();

        let result = generator("datasette-blocked").generate(temp_dir.path());
        assert!(result.is_err());
    }
}
