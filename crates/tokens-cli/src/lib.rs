//! Tokens CLI: load definitions from disk and resolve them
//!
//! Loading, configuration and logging live here so the core stays free of
//! I/O. The `tokens` binary is a thin wrapper over [`cli::run`].

pub mod cli;
pub mod config;
pub mod loader;
pub mod logging;

pub use cli::{run, Cli, OutputFormat};
pub use config::{ConfigError, TokensConfig};
pub use loader::{load_definition, LoadError};
