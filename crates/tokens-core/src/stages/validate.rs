//! Structural checks: the definition-level Validator and the Property Validator.
use crate::context::ResolveContext;
use crate::data_model::{Alias, Definition, Prop, REQUIRED_PROP_KEYS};
use crate::error::ResolveError;
use crate::stage::Stage;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Checks that raw data has the shape of a definition and converts it.
///
/// `props`, `aliases` and `global` must be objects and are checked in that
/// order; the first violation is reported. `imports` may be absent.
pub fn validate_definition(raw: Option<&Value>) -> Result<Definition, ResolveError> {
    let object = match raw {
        None | Some(Value::Null) => return Err(ResolveError::NullDefinition),
        Some(Value::Object(object)) => object,
        Some(_) => return Err(ResolveError::InvalidPropsType),
    };

    let props = object
        .get("props")
        .and_then(Value::as_object)
        .ok_or(ResolveError::InvalidPropsType)?;
    let aliases = object
        .get("aliases")
        .and_then(Value::as_object)
        .ok_or(ResolveError::InvalidAliasesType)?;
    let global = object
        .get("global")
        .and_then(Value::as_object)
        .ok_or(ResolveError::InvalidGlobalType)?;
    let imports = match object.get("imports") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(_) => return Err(ResolveError::InvalidImportsType),
    };

    Ok(Definition {
        props: entries(props, Prop::new, ResolveError::InvalidProperty)?,
        aliases: entries(aliases, Alias::new, ResolveError::InvalidAlias)?,
        global: Some(global.clone()),
        imports: Some(imports),
    })
}

fn entries<T>(
    map: &Map<String, Value>,
    build: fn(Map<String, Value>) -> T,
    invalid: fn(String) -> ResolveError,
) -> Result<IndexMap<String, T>, ResolveError> {
    map.iter()
        .map(|(key, value)| match value {
            Value::Object(fields) => Ok((key.clone(), build(fields.clone()))),
            _ => Err(invalid(key.clone())),
        })
        .collect()
}

/// Asserts every prop carries `value`, `type` and `category`.
#[derive(Debug, Default)]
pub struct PropertyValidatorStage;

impl Stage for PropertyValidatorStage {
    fn id(&self) -> &'static str {
        "props.validate"
    }

    fn run(&self, definition: Definition, _ctx: &ResolveContext) -> Result<Definition, ResolveError> {
        for (name, prop) in &definition.props {
            if let Some(key) = REQUIRED_PROP_KEYS.iter().find(|key| !prop.contains_key(**key)) {
                return Err(ResolveError::MissingPropertyKey {
                    prop: name.clone(),
                    key: key.to_string(),
                });
            }
        }
        Ok(definition)
    }
}
