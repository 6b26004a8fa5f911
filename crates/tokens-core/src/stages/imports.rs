use crate::context::ResolveContext;
use crate::data_model::Definition;
use crate::error::ResolveError;
use crate::runner::resolve_tree;
use crate::stage::Stage;
use tracing::debug;

/// Resolves every import through the full pipeline and folds the results
/// into the parent, later imports overriding earlier ones and the parent.
#[derive(Debug, Default)]
pub struct ImportResolverStage;

impl Stage for ImportResolverStage {
    fn id(&self) -> &'static str {
        "imports.resolve"
    }

    fn run(&self, definition: Definition, ctx: &ResolveContext) -> Result<Definition, ResolveError> {
        let Definition {
            mut props,
            mut aliases,
            global,
            imports,
        } = definition;
        let imports = imports.unwrap_or_default();

        if !imports.is_empty() && ctx.depth >= ctx.options.max_import_depth {
            return Err(ResolveError::ImportDepthExceeded(ctx.options.max_import_depth));
        }

        let nested = ctx.nested();
        let resolved = imports
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                debug!(index, depth = nested.depth, "resolving import");
                resolve_tree(Some(raw), &nested).map_err(|source| ResolveError::Import {
                    index,
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for import in resolved {
            aliases.extend(import.aliases);
            props.extend(import.props);
        }

        Ok(Definition {
            props,
            aliases,
            global,
            imports: None,
        })
    }
}
