use crate::context::ResolveContext;
use crate::data_model::{Definition, Prop};
use crate::error::ResolveError;
use crate::stage::Stage;

/// Overlays `global` beneath every prop; fields the prop already has win.
#[derive(Debug, Default)]
pub struct GlobalMergeStage;

impl Stage for GlobalMergeStage {
    fn id(&self) -> &'static str {
        "global.merge"
    }

    fn run(&self, definition: Definition, _ctx: &ResolveContext) -> Result<Definition, ResolveError> {
        let Definition {
            props,
            aliases,
            global,
            imports,
        } = definition;
        let global = global.unwrap_or_default();

        let props = props
            .into_iter()
            .map(|(key, prop)| {
                let mut merged = global.clone();
                merged.extend(prop.into_fields());
                (key, Prop::new(merged))
            })
            .collect();

        Ok(Definition {
            props,
            aliases,
            global: None,
            imports,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ResolveOptions;
    use crate::stages::validate_definition;
    use serde_json::json;

    #[test]
    fn test_prop_fields_take_precedence() {
        let raw = json!({
            "props": {
                "primary": { "value": "red", "category": "text-color" },
                "spacing": { "value": "1rem", "type": "size" }
            },
            "aliases": {},
            "global": { "type": "color", "category": "background-color" }
        });
        let options = ResolveOptions::default();
        let ctx = ResolveContext::new(&options);

        let merged = GlobalMergeStage
            .run(validate_definition(Some(&raw)).unwrap(), &ctx)
            .unwrap();

        assert!(merged.global.is_none());
        let primary = &merged.props["primary"];
        assert_eq!(primary.kind(), Some("color"));
        assert_eq!(primary.category(), Some("text-color"));
        let spacing = &merged.props["spacing"];
        assert_eq!(spacing.kind(), Some("size"));
        assert_eq!(spacing.category(), Some("background-color"));
    }
}
