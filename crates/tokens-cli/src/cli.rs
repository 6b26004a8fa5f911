//! Command-line surface of the `tokens` binary.

use crate::config::TokensConfig;
use crate::loader::load_definition;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tokens_core::{resolve, resolve_with_report, Catalog};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Resolve a token definition into a flat catalog.
#[derive(Debug, Parser)]
#[command(name = "tokens", version, about)]
pub struct Cli {
    /// Definition file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Transform plugin to apply, in order (repeatable)
    #[arg(short = 't', long = "transform")]
    pub transforms: Vec<String>,

    /// Keep each property's `meta` field
    #[arg(long)]
    pub include_meta: bool,

    #[arg(long)]
    pub max_import_depth: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write per-stage digests of the resolution to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Raise log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Config file merged with the command-line overrides.
    pub fn effective_config(&self) -> Result<TokensConfig> {
        let mut config = match &self.config {
            Some(path) => TokensConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => TokensConfig::default(),
        };

        if !self.transforms.is_empty() {
            config.transforms = self.transforms.clone();
        }
        if self.include_meta {
            config.include_meta = true;
        }
        if self.max_import_depth.is_some() {
            config.max_import_depth = self.max_import_depth;
        }
        Ok(config)
    }
}

/// Loads, resolves and renders the catalog.
pub fn run(cli: &Cli) -> Result<String> {
    let config = cli.effective_config()?;
    let options = config.to_options(&tokens_transforms::registry())?;

    let definition = load_definition(&cli.file)
        .with_context(|| format!("loading definition {}", cli.file.display()))?;

    let catalog = match &cli.report {
        Some(path) => {
            let (catalog, report) = resolve_with_report(Some(&definition), &options)?;
            let rendered = serde_json::to_string_pretty(&report)?;
            std::fs::write(path, rendered)
                .with_context(|| format!("writing report {}", path.display()))?;
            info!(path = %path.display(), "report written");
            catalog
        }
        None => resolve(Some(&definition), &options)?,
    };

    render(&catalog, cli.format)
}

pub fn render(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(catalog)?,
        OutputFormat::Yaml => serde_yaml::to_string(catalog)?,
    })
}
