//! Tokens Core: definition resolution pipeline
//!
//! Resolves a token definition (props, aliases, shared defaults and imported
//! fragments) into a flat catalog of fully resolved props.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tokens_core::{resolve, ResolveOptions};
//!
//! let definition = json!({
//!     "props": {
//!         "gap": { "value": "{!base}", "type": "size" }
//!     },
//!     "aliases": { "base": { "value": "8px" } },
//!     "global": { "category": "space" }
//! });
//!
//! let catalog = resolve(Some(&definition), &ResolveOptions::default()).unwrap();
//! assert_eq!(catalog["gap"].value(), "8px");
//! assert_eq!(catalog["gap"].name(), Some("gap"));
//! ```

pub mod context;
pub mod data_model;
pub mod error;
pub mod runner;
pub mod stage;
pub mod stages;
pub mod transform;

pub use context::{ResolveContext, ResolveOptions, DEFAULT_MAX_IMPORT_DEPTH};
pub use data_model::{Alias, Catalog, Definition, Fields, Prop, ResolutionReport, StageProof};
pub use error::{ResolveError, TransformError};
pub use runner::{resolve, resolve_tree, resolve_with_report, PipelineRunner};
pub use stage::Stage;
pub use transform::ValueTransform;
