//! Tokens Transforms: value transform plugins
//!
//! Each plugin is a `{predicate, transform}` pair registered under a name.
//! The registry hands them to `tokens-core` in the order the caller asks for.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tokens_core::{resolve, ResolveOptions};
//!
//! let transforms = tokens_transforms::registry().select(&["relative/pixel"]).unwrap();
//! let options = ResolveOptions::new().with_transforms(transforms);
//!
//! let definition = json!({
//!     "props": { "spacing": { "value": "1rem", "type": "dimension", "category": "space" } },
//!     "aliases": {},
//!     "global": {}
//! });
//! let catalog = resolve(Some(&definition), &options).unwrap();
//! assert_eq!(catalog["spacing"].value(), "16px");
//! ```

pub mod unit;
pub mod util;

use indexmap::IndexMap;
use thiserror::Error;
use tokens_core::ValueTransform;

pub use unit::{relative_pixel, relative_pixel_value, RELATIVE_PIXEL, RELATIVE_PIXEL_VALUE};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown transform \"{0}\"")]
    UnknownTransform(String),
}

/// Plugins by name, in registration order.
#[derive(Debug, Clone, Default)]
pub struct TransformRegistry {
    transforms: IndexMap<String, ValueTransform>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a plugin under its own name, replacing any previous one.
    pub fn register(mut self, transform: ValueTransform) -> Self {
        self.transforms.insert(transform.name().to_string(), transform);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ValueTransform> {
        self.transforms.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.transforms.keys().map(String::as_str)
    }

    /// Plugins for `names`, in the order given.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<ValueTransform>, RegistryError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .cloned()
                    .ok_or_else(|| RegistryError::UnknownTransform(name.to_string()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

/// Registry holding every built-in plugin.
pub fn registry() -> TransformRegistry {
    TransformRegistry::new()
        .register(relative_pixel())
        .register(relative_pixel_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let registry = registry();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(registry.len(), 2);
        assert_eq!(names, [RELATIVE_PIXEL, RELATIVE_PIXEL_VALUE]);
    }

    #[test]
    fn test_select_keeps_requested_order() {
        let selected = registry()
            .select(&[RELATIVE_PIXEL_VALUE, RELATIVE_PIXEL])
            .unwrap();
        let names: Vec<&str> = selected.iter().map(|t| t.name()).collect();
        assert_eq!(names, [RELATIVE_PIXEL_VALUE, RELATIVE_PIXEL]);
    }

    #[test]
    fn test_select_unknown() {
        let err = registry().select(&["color/hex"]).unwrap_err();
        assert_eq!(err, RegistryError::UnknownTransform("color/hex".to_string()));
        assert_eq!(err.to_string(), "Unknown transform \"color/hex\"");
    }
}
