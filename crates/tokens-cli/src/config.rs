//! Resolver configuration file (`tokens.yaml`).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tokens_core::{ResolveOptions, DEFAULT_MAX_IMPORT_DEPTH};
use tokens_transforms::{RegistryError, TransformRegistry};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error(transparent)]
    Transform(#[from] RegistryError),
}

/// Every field is optional; an empty file means defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokensConfig {
    /// Plugin names, applied in this order.
    pub transforms: Vec<String>,
    #[serde(alias = "includeMeta")]
    pub include_meta: bool,
    #[serde(alias = "maxImportDepth")]
    pub max_import_depth: Option<usize>,
}

impl TokensConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Builds resolver options, looking transforms up in `registry`.
    pub fn to_options(&self, registry: &TransformRegistry) -> Result<ResolveOptions, ConfigError> {
        let transforms = registry.select(&self.transforms)?;
        Ok(ResolveOptions::new()
            .with_transforms(transforms)
            .include_meta(self.include_meta)
            .max_import_depth(self.max_import_depth.unwrap_or(DEFAULT_MAX_IMPORT_DEPTH)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(TokensConfig::from_yaml("").unwrap(), TokensConfig::default());
        assert_eq!(TokensConfig::from_yaml("  \n").unwrap(), TokensConfig::default());
    }

    #[test]
    fn test_camel_case_aliases() {
        let config = TokensConfig::from_yaml(
            "transforms:\n  - relative/pixel\nincludeMeta: true\nmaxImportDepth: 4\n",
        )
        .unwrap();

        assert_eq!(config.transforms, ["relative/pixel"]);
        assert!(config.include_meta);
        assert_eq!(config.max_import_depth, Some(4));
    }

    #[test]
    fn test_to_options() {
        let config = TokensConfig {
            transforms: vec!["relative/pixelValue".to_string()],
            include_meta: true,
            max_import_depth: None,
        };

        let options = config.to_options(&tokens_transforms::registry()).unwrap();
        assert_eq!(options.transforms.len(), 1);
        assert_eq!(options.transforms[0].name(), "relative/pixelValue");
        assert!(options.include_meta);
        assert_eq!(options.max_import_depth, DEFAULT_MAX_IMPORT_DEPTH);
    }

    #[test]
    fn test_unknown_transform() {
        let config = TokensConfig {
            transforms: vec!["nope".to_string()],
            ..TokensConfig::default()
        };

        let err = config.to_options(&tokens_transforms::registry()).unwrap_err();
        assert_eq!(err.to_string(), "Unknown transform \"nope\"");
    }
}
