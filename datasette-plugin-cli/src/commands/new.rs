//! Plugin scaffolding command

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;
use crate::generator::{GeneratedProject, PluginGenerator};
use crate::names::{PluginNames, PLUGIN_PREFIX};

/// Create a new Datasette plugin project
pub struct NewCommand {
    generator: PluginGenerator,
    output_dir: PathBuf,
}

impl NewCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `name` - Plugin name (conventionally `datasette-*`)
    /// * `path` - Directory the project is created in, created if missing
    /// * `config` - Metadata substituted into the templates
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the output directory cannot
    /// be created or resolved.
    pub fn new(name: String, path: &Path, config: &ScaffoldConfig) -> Result<Self> {
        let names = PluginNames::new(name)?;
        let output_dir = resolve_output_dir(path)?;

        Ok(Self {
            generator: PluginGenerator::new(names, config),
            output_dir,
        })
    }

    /// Absolute directory the project root is created under
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns the first filesystem or rendering error; files already
    /// written stay on disk.
    pub fn execute(&self) -> Result<GeneratedProject> {
        let names = self.generator.names();
        if !names.has_expected_prefix() {
            println!(
                "{}",
                style(format!(
                    "Warning: Plugin name should start with '{PLUGIN_PREFIX}'"
                ))
                .yellow()
            );
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message(format!("Generating {}...", names.plugin_name()));

        let result = self.generator.generate(&self.output_dir);
        spinner.finish_and_clear();
        let project = result?;

        print_success(&project.root);

        Ok(project)
    }
}

/// Resolve `path` to an absolute, existing directory
fn resolve_output_dir(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to get current directory")?
            .join(path)
    };

    if !absolute.exists() {
        tracing::debug!(path = %absolute.display(), "creating output directory");
        fs::create_dir_all(&absolute)
            .with_context(|| format!("Failed to create directory: {}", absolute.display()))?;
    }

    fs::canonicalize(&absolute)
        .with_context(|| format!("Failed to resolve path: {}", absolute.display()))
}

/// Print success message with next steps
fn print_success(root: &Path) {
    println!(
        "{} {}",
        style("Created plugin at:").green().bold(),
        style(root.display()).cyan()
    );
    println!();
    println!("{}", style("Next steps:").bold());
    println!("  {}", style(format!("cd {}", root.display())).cyan());
    println!("  {}", style("pip install -e '.[test]'").cyan());
    println!("  {}", style("pytest").cyan());
}
