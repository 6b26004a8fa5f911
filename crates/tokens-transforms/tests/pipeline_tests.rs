//! Built-in plugins running inside the full resolution pipeline.

use serde_json::json;
use tokens_core::{resolve, ResolveError, ResolveOptions};
use tokens_transforms::{registry, RELATIVE_PIXEL, RELATIVE_PIXEL_VALUE};

fn options(names: &[&str]) -> ResolveOptions {
    ResolveOptions::new().with_transforms(registry().select(names).unwrap())
}

#[test]
fn test_spacing_rem_to_px() {
    let definition = json!({
        "props": {
            "spacing": { "value": "1rem", "type": "dimension", "category": "space" }
        },
        "aliases": {},
        "global": {}
    });

    let catalog = resolve(Some(&definition), &options(&[RELATIVE_PIXEL])).unwrap();
    assert_eq!(catalog["spacing"].value(), "16px");
}

#[test]
fn test_aliases_and_meta_feed_the_transform() {
    let definition = json!({
        "props": {
            "gutter": {
                "value": "{!space-lg}",
                "type": "dimension",
                "category": "space",
                "meta": { "baseFontPixel": 10 }
            },
            "color": { "value": "{!brand}", "type": "color", "category": "text-color" }
        },
        "aliases": {
            "space-lg": { "value": "{!space-base}" },
            "space-base": { "value": "2rem" },
            "brand": { "value": "#0070d2" }
        },
        "global": {}
    });

    let catalog = resolve(Some(&definition), &options(&[RELATIVE_PIXEL])).unwrap();
    assert_eq!(catalog["gutter"].value(), "20px");
    assert_eq!(catalog["color"].value(), "#0070d2");
    assert!(catalog["gutter"].meta().is_none());
}

#[test]
fn test_first_matching_plugin_wins() {
    let definition = json!({
        "props": { "size": { "value": "1rem", "type": "dimension", "category": "size" } },
        "aliases": {},
        "global": {}
    });

    // Once the value is "16", the second predicate no longer holds.
    let catalog = resolve(
        Some(&definition),
        &options(&[RELATIVE_PIXEL_VALUE, RELATIVE_PIXEL]),
    )
    .unwrap();
    assert_eq!(catalog["size"].value(), "16");
}

#[test]
fn test_invalid_rem_aborts() {
    let definition = json!({
        "props": {
            "ok": { "value": "1rem", "type": "dimension", "category": "space" },
            "bad": { "value": "huge rem", "type": "dimension", "category": "space" }
        },
        "aliases": {},
        "global": {}
    });

    let err = resolve(Some(&definition), &options(&[RELATIVE_PIXEL])).unwrap_err();
    assert_eq!(err.to_string(), "Property \"bad\" has an invalid rem value \"huge rem\"");
    assert!(matches!(err, ResolveError::Transform { ref prop, .. } if prop == "bad"));
}
