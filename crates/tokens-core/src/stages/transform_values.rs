use crate::context::ResolveContext;
use crate::data_model::{Definition, Prop};
use crate::error::ResolveError;
use crate::stage::Stage;
use crate::transform::ValueTransform;
use indexmap::IndexMap;
use tracing::trace;

/// Runs the configured value transforms over every prop.
#[derive(Debug, Default)]
pub struct TransformValuesStage;

impl Stage for TransformValuesStage {
    fn id(&self) -> &'static str {
        "values.transform"
    }

    fn run(&self, definition: Definition, ctx: &ResolveContext) -> Result<Definition, ResolveError> {
        let transforms = &ctx.options.transforms;
        if transforms.is_empty() {
            return Ok(definition);
        }

        let props = definition
            .props
            .into_iter()
            .map(|(key, prop)| {
                let prop = apply_transforms(&key, prop, transforms)?;
                Ok((key, prop))
            })
            .collect::<Result<IndexMap<_, _>, ResolveError>>()?;

        Ok(Definition {
            props,
            ..definition
        })
    }
}

/// Folds `transforms` over one prop. Each predicate sees the prop as updated
/// by the transforms before it; the first failing transform aborts.
pub fn apply_transforms(
    key: &str,
    prop: Prop,
    transforms: &[ValueTransform],
) -> Result<Prop, ResolveError> {
    transforms.iter().try_fold(prop, |prop, transform| {
        if !transform.applies_to(&prop) {
            return Ok(prop);
        }
        let value = transform
            .apply(&prop)
            .map_err(|err| ResolveError::Transform {
                prop: key.to_string(),
                transform: transform.name().to_string(),
                message: err.to_string(),
            })?;
        trace!(prop = key, transform = transform.name(), %value, "value transformed");
        Ok(prop.with_value(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use serde_json::{json, Value};

    fn prop(value: Value) -> Prop {
        let fields = json!({ "value": value, "type": "t", "category": "c" });
        match fields {
            Value::Object(fields) => Prop::new(fields),
            _ => unreachable!(),
        }
    }

    fn suffix(name: &str, suffix: &'static str) -> ValueTransform {
        ValueTransform::new(
            name,
            |p: &Prop| p.value().is_string(),
            move |p: &Prop| Ok(json!(format!("{}{}", p.value().as_str().unwrap_or_default(), suffix))),
        )
    }

    #[test]
    fn test_chain_sees_updated_prop() {
        let only_after_a = ValueTransform::new(
            "b",
            |p: &Prop| p.value().as_str().is_some_and(|v| v.ends_with("-a")),
            |p: &Prop| Ok(json!(format!("{}-b", p.value().as_str().unwrap_or_default()))),
        );
        let transforms = vec![suffix("a", "-a"), only_after_a];

        let out = apply_transforms("p", prop(json!("x")), &transforms).unwrap();
        assert_eq!(out.value(), &json!("x-a-b"));
    }

    #[test]
    fn test_false_predicate_skips() {
        let never = ValueTransform::new(
            "never",
            |_: &Prop| false,
            |_: &Prop| Err(TransformError::new("must not run")),
        );

        let out = apply_transforms("p", prop(json!("x")), &[never]).unwrap();
        assert_eq!(out.value(), &json!("x"));
    }

    #[test]
    fn test_failure_names_prop_and_transform() {
        let fails = ValueTransform::new(
            "explode",
            |_: &Prop| true,
            |_: &Prop| Err(TransformError::new("boom")),
        );

        let err = apply_transforms("spacing", prop(json!("x")), &[fails]).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(
            err,
            ResolveError::Transform {
                prop: "spacing".to_string(),
                transform: "explode".to_string(),
                message: "boom".to_string(),
            }
        );
    }
}
