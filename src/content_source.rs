//! Where graph and plan content comes from.
//!
//! Views fetch once through a [ContentSource] and only build their controllers when the
//! fetch succeeds.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::plan_payload::{fallback_plan, plan_from_payload};
use crate::seed::seed_graph;
use crate::types::{GraphPayload, PlanError, Profession, TransitionGraph, TransitionPlan};

/// Graph file name under a content directory.
pub const GRAPH_FILENAME: &str = "graph.json";
/// Plan files live under this subdirectory of a content directory.
pub const PLANS_DIR: &str = "plans";

#[derive(Debug, Error)]
pub enum ContentError {
  #[error("reading content: {0}")]
  Io(#[from] io::Error),
  #[error("decoding content: {0}")]
  Json(#[from] serde_json::Error),
  #[error("unknown profession id: {0}")]
  UnknownProfession(String),
  #[error("cannot plan a transition from {0} to itself")]
  SameProfession(String),
  #[error("invalid plan: {0}")]
  InvalidPlan(#[from] PlanError),
}

/// Supplies the transition graph and per-pair transition plans.
#[async_trait]
pub trait ContentSource: Send + Sync {
  async fn fetch_graph(&self) -> Result<TransitionGraph, ContentError>;

  async fn fetch_plan(
    &self,
    source_id: &str,
    target_id: &str,
  ) -> Result<TransitionPlan, ContentError>;
}

/// File name of the plan for `(source_id, target_id)`, e.g. `a__to__b.json`.
pub fn plan_filename(source_id: &str, target_id: &str) -> String {
  format!("{source_id}__to__{target_id}.json")
}

fn resolve_pair(
  graph: &TransitionGraph,
  source_id: &str,
  target_id: &str,
) -> Result<(Profession, Profession), ContentError> {
  if source_id == target_id {
    return Err(ContentError::SameProfession(source_id.to_string()));
  }
  let lookup = |id: &str| {
    graph
      .node(id)
      .cloned()
      .ok_or_else(|| ContentError::UnknownProfession(id.to_string()))
  };
  Ok((lookup(source_id)?, lookup(target_id)?))
}

/// Built-in seed graph; plans are always the generic fallback plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedContentSource;

#[async_trait]
impl ContentSource for SeedContentSource {
  async fn fetch_graph(&self) -> Result<TransitionGraph, ContentError> {
    Ok(seed_graph())
  }

  async fn fetch_plan(
    &self,
    source_id: &str,
    target_id: &str,
  ) -> Result<TransitionPlan, ContentError> {
    let (source, target) = resolve_pair(&seed_graph(), source_id, target_id)?;
    Ok(fallback_plan(&source, &target))
  }
}

/// Content directory on disk: `graph.json` plus `plans/<source>__to__<target>.json`.
#[derive(Debug, Clone)]
pub struct FileContentSource {
  dir: PathBuf,
}

impl FileContentSource {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  fn plan_path(&self, source_id: &str, target_id: &str) -> PathBuf {
    self
      .dir
      .join(PLANS_DIR)
      .join(plan_filename(source_id, target_id))
  }
}

#[async_trait]
impl ContentSource for FileContentSource {
  #[instrument(level = "trace", skip(self), fields(dir = %self.dir.display()))]
  async fn fetch_graph(&self) -> Result<TransitionGraph, ContentError> {
    let bytes = tokio::fs::read(self.dir.join(GRAPH_FILENAME)).await?;
    let payload: GraphPayload = serde_json::from_slice(&bytes)?;
    info!(
      nodes = payload.nodes.len(),
      edges = payload.edges.len(),
      "loaded transition graph"
    );
    Ok(TransitionGraph::from_payload(payload))
  }

  /// A missing or undecodable plan file yields the fallback plan.
  #[instrument(level = "trace", skip(self), fields(dir = %self.dir.display()))]
  async fn fetch_plan(
    &self,
    source_id: &str,
    target_id: &str,
  ) -> Result<TransitionPlan, ContentError> {
    let graph = self.fetch_graph().await?;
    let (source, target) = resolve_pair(&graph, source_id, target_id)?;
    let path = self.plan_path(source_id, target_id);

    let bytes = match tokio::fs::read(&path).await {
      Ok(bytes) => bytes,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        info!(path = %path.display(), "no plan file, using fallback plan");
        return Ok(fallback_plan(&source, &target));
      }
      Err(e) => return Err(e.into()),
    };
    match serde_json::from_slice::<Value>(&bytes) {
      Ok(payload) => Ok(plan_from_payload(&payload, &source, &target)?),
      Err(e) => {
        warn!(path = %path.display(), error = %e, "undecodable plan file, using fallback plan");
        Ok(fallback_plan(&source, &target))
      }
    }
  }
}
