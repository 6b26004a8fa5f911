use crate::context::ResolveContext;
use crate::data_model::{Definition, NAME_KEY};
use crate::error::ResolveError;
use crate::stage::Stage;
use serde_json::Value;

/// Stamps each prop with its own key under `name`.
#[derive(Debug, Default)]
pub struct NameAnnotatorStage;

impl Stage for NameAnnotatorStage {
    fn id(&self) -> &'static str {
        "props.name"
    }

    fn run(&self, definition: Definition, _ctx: &ResolveContext) -> Result<Definition, ResolveError> {
        let props = definition
            .props
            .into_iter()
            .map(|(key, prop)| {
                let prop = prop.with_field(NAME_KEY, Value::String(key.clone()));
                (key, prop)
            })
            .collect();

        Ok(Definition {
            props,
            ..definition
        })
    }
}
