use crate::context::ResolveOptions;
use crate::data_model::{Catalog, Definition, META_KEY};

/// Turns the fully resolved top-level definition into the catalog.
///
/// Only `props` survive. `meta` is stripped from every prop unless the caller
/// asked to keep it.
pub fn finalize(definition: Definition, options: &ResolveOptions) -> Catalog {
    let Definition { props, .. } = definition;
    if options.include_meta {
        return props;
    }
    props
        .into_iter()
        .map(|(key, prop)| (key, prop.without_field(META_KEY)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::validate_definition;
    use serde_json::json;

    fn definition() -> Definition {
        validate_definition(Some(&json!({
            "props": {
                "a": { "value": 1, "type": "t", "category": "c", "meta": { "note": "x" } },
                "b": { "value": 2, "type": "t", "category": "c" }
            },
            "aliases": { "unused": { "value": 3 } },
            "global": {}
        })))
        .unwrap()
    }

    #[test]
    fn test_meta_stripped_by_default() {
        let catalog = finalize(definition(), &ResolveOptions::default());
        assert_eq!(catalog.len(), 2);
        assert!(catalog.values().all(|prop| prop.meta().is_none()));
    }

    #[test]
    fn test_meta_kept_when_requested() {
        let catalog = finalize(definition(), &ResolveOptions::default().include_meta(true));
        assert_eq!(catalog["a"].meta(), Some(&json!({ "note": "x" })));
        assert!(catalog["b"].meta().is_none());
    }
}
