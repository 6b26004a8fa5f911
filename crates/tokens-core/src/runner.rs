//! Pipeline Runner: chains the stages and exposes the resolution entry points
use crate::context::{ResolveContext, ResolveOptions};
use crate::data_model::{Catalog, Definition, ResolutionReport, StageProof};
use crate::error::ResolveError;
use crate::stage::Stage;
use crate::stages::{finalize, standard_stages, validate_definition};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info, warn};

const VALIDATE_ID: &str = "validate";
const FINALIZE_ID: &str = "finalize";

pub struct PipelineRunner {
    stages: Vec<Box<dyn Stage>>,
    pipeline_id: String,
}

impl PipelineRunner {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        let pipeline_id = stages
            .iter()
            .map(|s| s.id())
            .collect::<Vec<_>>()
            .join("→");

        Self { stages, pipeline_id }
    }

    /// Runner over stages 2–8.
    pub fn standard() -> Self {
        Self::new(standard_stages())
    }

    pub fn run(&self, definition: Definition, ctx: &ResolveContext) -> Result<Definition, ResolveError> {
        self.stages.iter().try_fold(definition, |current, stage| {
            debug!(stage = stage.id(), depth = ctx.depth, "running stage");
            stage.run(current, ctx)
        })
    }

    /// Like [`run`](Self::run), recording a digest of the definition around every stage.
    pub fn run_traced(
        &self,
        definition: Definition,
        ctx: &ResolveContext,
    ) -> Result<(Definition, Vec<StageProof>), ResolveError> {
        let mut current = definition;
        let mut proofs = Vec::new();

        for stage in &self.stages {
            let start = Instant::now();
            let in_hash = hash_bytes(&current.to_bytes());

            let result = stage.run(current, ctx)?;

            let out_hash = hash_bytes(&result.to_bytes());
            let latency_us = start.elapsed().as_micros() as u64;
            debug!(stage = stage.id(), latency_us, "stage finished");

            proofs.push(StageProof {
                id: stage.id().to_string(),
                in_hash,
                out_hash,
                latency_us,
            });

            current = result;
        }

        Ok((current, proofs))
    }

    pub fn pipeline_id(&self) -> &str {
        &self.pipeline_id
    }
}

fn hash_bytes(data: &[u8]) -> String {
    format!("blake3:{}", blake3::hash(data))
}

/// Stages 1–8 over one definition, without finalization.
///
/// This is the routine the import resolver re-enters for each import.
pub fn resolve_tree(raw: Option<&Value>, ctx: &ResolveContext) -> Result<Definition, ResolveError> {
    let definition = validate_definition(raw)?;
    PipelineRunner::standard().run(definition, ctx)
}

/// Resolves a raw definition into its flat catalog.
pub fn resolve(definition: Option<&Value>, options: &ResolveOptions) -> Result<Catalog, ResolveError> {
    let ctx = ResolveContext::new(options);
    let span = tracing::debug_span!("resolve", trace_id = %ctx.trace_id);
    let _guard = span.enter();

    match resolve_tree(definition, &ctx) {
        Ok(resolved) => {
            let catalog = finalize(resolved, options);
            info!(props = catalog.len(), "definition resolved");
            Ok(catalog)
        }
        Err(err) => {
            warn!(error = %err, "definition resolution failed");
            Err(err)
        }
    }
}

/// Resolves a raw definition and reports a digest of every top-level stage.
pub fn resolve_with_report(
    definition: Option<&Value>,
    options: &ResolveOptions,
) -> Result<(Catalog, ResolutionReport), ResolveError> {
    let ctx = ResolveContext::new(options);
    let span = tracing::debug_span!("resolve", trace_id = %ctx.trace_id);
    let _guard = span.enter();

    let runner = PipelineRunner::standard();
    let mut stages = Vec::new();

    let start = Instant::now();
    let in_hash = hash_bytes(&serde_json::to_vec(&definition).unwrap_or_default());
    let validated = validate_definition(definition).inspect_err(|err| {
        warn!(error = %err, "definition resolution failed");
    })?;
    stages.push(StageProof {
        id: VALIDATE_ID.to_string(),
        in_hash,
        out_hash: hash_bytes(&validated.to_bytes()),
        latency_us: start.elapsed().as_micros() as u64,
    });

    let (resolved, proofs) = runner.run_traced(validated, &ctx).inspect_err(|err| {
        warn!(error = %err, "definition resolution failed");
    })?;
    stages.extend(proofs);

    let start = Instant::now();
    let in_hash = hash_bytes(&resolved.to_bytes());
    let catalog = finalize(resolved, options);
    stages.push(StageProof {
        id: FINALIZE_ID.to_string(),
        in_hash,
        out_hash: hash_bytes(&serde_json::to_vec(&catalog).unwrap_or_default()),
        latency_us: start.elapsed().as_micros() as u64,
    });

    let report = ResolutionReport {
        trace_id: ctx.trace_id.clone(),
        pipeline_id: format!("{}→{}→{}", VALIDATE_ID, runner.pipeline_id(), FINALIZE_ID),
        resolved_at: chrono::Utc::now(),
        stages,
    };
    info!(props = catalog.len(), pipeline = %report.pipeline_id, "definition resolved");

    Ok((catalog, report))
}
