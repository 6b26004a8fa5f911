//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Definition is null")]
    NullDefinition,

    #[error("\"props\" key must be an object")]
    InvalidPropsType,

    #[error("\"aliases\" key must be an object")]
    InvalidAliasesType,

    #[error("\"global\" key must be an object")]
    InvalidGlobalType,

    #[error("\"imports\" key must be an array")]
    InvalidImportsType,

    #[error("Property \"{0}\" must be an object")]
    InvalidProperty(String),

    #[error("Alias \"{0}\" must be an object")]
    InvalidAlias(String),

    #[error("Property \"{prop}\" contained no \"{key}\" key")]
    MissingPropertyKey { prop: String, key: String },

    /// Failure inside an imported definition. Displays the inner message unchanged.
    #[error("{source}")]
    Import {
        index: usize,
        source: Box<ResolveError>,
    },

    #[error("Imports nested deeper than {0} levels")]
    ImportDepthExceeded(usize),

    #[error("Alias \"{0}\" not found")]
    AliasNotFound(String),

    #[error("Alias reference cycle: {chain}")]
    CyclicAlias { chain: String },

    /// A value transform rejected a property. Displays the transform's message unchanged.
    #[error("{message}")]
    Transform {
        prop: String,
        transform: String,
        message: String,
    },
}

impl ResolveError {
    /// Innermost error, looking through nested import failures.
    pub fn root_cause(&self) -> &ResolveError {
        match self {
            Self::Import { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Indices of the imports the failure travelled through, outermost first.
    pub fn import_path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = self;
        while let Self::Import { index, source } = current {
            path.push(*index);
            current = source;
        }
        path
    }
}

/// Error signalled by a value transform plugin.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransformError(pub String);

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
