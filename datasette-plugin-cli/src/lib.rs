//! Datasette plugin scaffolding library
//!
//! Generates the skeleton of a Datasette plugin project: packaging metadata
//! with the `datasette` entry point, a hook stub, a pytest smoke test, and
//! the usual ignore/config files.
//!
//! # Example
//!
//! ```rust,no_run
//! use datasette_plugin_cli_lib::{PluginGenerator, PluginNames, ScaffoldConfig};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let names = PluginNames::new("datasette-my-feature")?;
//! let generator = PluginGenerator::new(names, &ScaffoldConfig::default());
//! let project = generator.generate(Path::new("/tmp/plugins"))?;
//! println!("{}", project.root.display());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod generator;
pub mod names;
pub mod observability;
pub mod templates;

pub use commands::NewCommand;
pub use config::ScaffoldConfig;
pub use generator::{GeneratedProject, PluginGenerator};
pub use names::PluginNames;
pub use templates::PluginTemplate;
