//! Definition loading from JSON and YAML files.
//!
//! String entries of `imports` are paths relative to the importing file; they
//! are loaded recursively and inlined so the core only ever sees values.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
    #[error("Unsupported definition format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("Import cycle: {0}")]
    CyclicImport(String),
}

/// Source format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(Self::Json),
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parses definition source text.
pub fn parse_definition(content: &str, format: Format, path: &Path) -> Result<Value, LoadError> {
    let parsed = match format {
        Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| LoadError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Loads a definition file and inlines its file imports.
pub fn load_definition(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    let mut stack = Vec::new();
    load(path.as_ref(), &mut stack)
}

fn load(path: &Path, stack: &mut Vec<PathBuf>) -> Result<Value, LoadError> {
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let canonical = path.canonicalize().map_err(io_error)?;

    if stack.contains(&canonical) {
        let chain = stack
            .iter()
            .chain(std::iter::once(&canonical))
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        return Err(LoadError::CyclicImport(chain));
    }

    let format = Format::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let content = fs::read_to_string(path).map_err(io_error)?;
    let mut definition = parse_definition(&content, format, path)?;
    debug!(path = %path.display(), "loaded definition");

    let base_dir = canonical.parent().map(Path::to_path_buf).unwrap_or_default();
    stack.push(canonical);
    inline_imports(&mut definition, &base_dir, stack)?;
    stack.pop();

    Ok(definition)
}

/// Replaces path entries of `imports` with the loaded definitions. Inline
/// object imports are searched too, relative to the same directory.
fn inline_imports(definition: &mut Value, base_dir: &Path, stack: &mut Vec<PathBuf>) -> Result<(), LoadError> {
    let Some(Value::Array(imports)) = definition.get_mut("imports") else {
        return Ok(());
    };

    for entry in imports.iter_mut() {
        if let Value::String(relative) = entry {
            let path = base_dir.join(relative.as_str());
            *entry = load(&path, stack)?;
        } else if entry.is_object() {
            inline_imports(entry, base_dir, stack)?;
        }
    }
    Ok(())
}
