//! Resolution stages, in pipeline order.
//!
//! ```text
//! validate → global.merge → props.validate → imports.resolve
//!          → aliases.nested → aliases.props → props.name → values.transform → finalize
//! ```
//!
//! `validate` and `finalize` sit at the boundaries: the first turns raw data
//! into a [`Definition`](crate::Definition), the last turns the result into a
//! [`Catalog`](crate::Catalog). Everything in between is a [`Stage`].

mod aliases;
mod finalize;
mod global;
mod imports;
mod names;
mod transform_values;
mod validate;

pub use aliases::{alias_refs, AliasRef, NestedAliasStage, PropAliasStage, ALIAS_PATTERN};
pub use finalize::finalize;
pub use global::GlobalMergeStage;
pub use imports::ImportResolverStage;
pub use names::NameAnnotatorStage;
pub use transform_values::{apply_transforms, TransformValuesStage};
pub use validate::{validate_definition, PropertyValidatorStage};

use crate::stage::Stage;

/// Stages 2–8 in the order the runner chains them.
pub fn standard_stages() -> Vec<Box<dyn Stage>> {
    vec![
        Box::new(GlobalMergeStage),
        Box::new(PropertyValidatorStage),
        Box::new(ImportResolverStage),
        Box::new(NestedAliasStage),
        Box::new(PropAliasStage),
        Box::new(NameAnnotatorStage),
        Box::new(TransformValuesStage),
    ]
}
