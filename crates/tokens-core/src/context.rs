//! Resolve options and the per-run context threaded through the stages
use crate::transform::ValueTransform;

/// Default bound on how deep imports may nest.
pub const DEFAULT_MAX_IMPORT_DEPTH: usize = 32;

/// Caller-facing configuration of a resolution.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub transforms: Vec<ValueTransform>,
    /// Keep each prop's `meta` field in the catalog.
    pub include_meta: bool,
    pub max_import_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            transforms: Vec::new(),
            include_meta: false,
            max_import_depth: DEFAULT_MAX_IMPORT_DEPTH,
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(mut self, transform: ValueTransform) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn with_transforms(mut self, transforms: impl IntoIterator<Item = ValueTransform>) -> Self {
        self.transforms.extend(transforms);
        self
    }

    pub fn include_meta(mut self, include: bool) -> Self {
        self.include_meta = include;
        self
    }

    pub fn max_import_depth(mut self, depth: usize) -> Self {
        self.max_import_depth = depth;
        self
    }
}

/// State shared by the stages of one pipeline run.
#[derive(Debug, Clone)]
pub struct ResolveContext<'a> {
    pub options: &'a ResolveOptions,
    /// Import nesting level; 0 for the top-level definition.
    pub depth: usize,
    pub trace_id: String,
}

impl<'a> ResolveContext<'a> {
    pub fn new(options: &'a ResolveOptions) -> Self {
        Self {
            options,
            depth: 0,
            trace_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Context for a definition imported by the current one.
    pub fn nested(&self) -> Self {
        Self {
            options: self.options,
            depth: self.depth + 1,
            trace_id: self.trace_id.clone(),
        }
    }
}
