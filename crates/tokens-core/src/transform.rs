//! Value transforms: predicate-gated functions applied to resolved props.
use crate::data_model::Prop;
use crate::error::TransformError;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

pub type Predicate = Arc<dyn Fn(&Prop) -> bool + Send + Sync>;
pub type TransformFn = Arc<dyn Fn(&Prop) -> Result<Value, TransformError> + Send + Sync>;

/// A `{predicate, transform}` pair. The transform only runs when the predicate
/// holds for the prop as it stands at that point of the chain.
#[derive(Clone)]
pub struct ValueTransform {
    name: String,
    predicate: Predicate,
    transform: TransformFn,
}

impl ValueTransform {
    pub fn new<P, T>(name: impl Into<String>, predicate: P, transform: T) -> Self
    where
        P: Fn(&Prop) -> bool + Send + Sync + 'static,
        T: Fn(&Prop) -> Result<Value, TransformError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
            transform: Arc::new(transform),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn applies_to(&self, prop: &Prop) -> bool {
        (self.predicate)(prop)
    }

    pub fn apply(&self, prop: &Prop) -> Result<Value, TransformError> {
        (self.transform)(prop)
    }
}

impl fmt::Debug for ValueTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueTransform")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
