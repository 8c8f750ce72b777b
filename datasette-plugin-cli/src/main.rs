//! datasette-plugin CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use datasette_plugin_cli_lib::{observability, NewCommand, ScaffoldConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "datasette-plugin")]
#[command(version)]
#[command(about = "Create a new Datasette plugin", long_about = None)]
struct Cli {
    /// Plugin name (e.g., datasette-my-feature)
    name: String,

    /// Output directory
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Project description written to pyproject.toml
    #[arg(long)]
    description: Option<String>,

    /// Author name written to pyproject.toml
    #[arg(long)]
    author: Option<String>,

    /// Author email written to pyproject.toml
    #[arg(long)]
    email: Option<String>,

    /// Additional config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    let config = ScaffoldConfig::load(cli.config.as_deref())?.with_overrides(
        cli.description,
        cli.author,
        cli.email,
    );

    let cmd = NewCommand::new(cli.name, &cli.path, &config)?;
    cmd.execute()?;

    Ok(())
}
