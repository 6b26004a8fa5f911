//! Stage Trait: the single contract shared by the resolution stages
use crate::context::ResolveContext;
use crate::data_model::Definition;
use crate::error::ResolveError;

/// One step of the resolution pipeline.
///
/// A stage takes ownership of the definition and hands back a new one; it
/// never touches state shared with the caller.
pub trait Stage: Send + Sync {
    /// Unique stage id (e.g. "aliases.props")
    fn id(&self) -> &'static str;

    fn run(&self, definition: Definition, ctx: &ResolveContext) -> Result<Definition, ResolveError>;
}
