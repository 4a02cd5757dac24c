//! A directed transition between two professions.

use serde::{Deserialize, Serialize};

use super::Difficulty;

/// Career stage assumed when the content omits one.
pub const DEFAULT_STAGE: &str = "Mid-Career";

fn default_stage() -> String {
  DEFAULT_STAGE.to_string()
}

/// A directed transition between two professions.
///
/// Several edges may share the same `(source, target)` pair with a different stage or difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEdge {
  pub id: String,
  pub source: String,
  pub target: String,
  pub label: String,
  #[serde(default = "default_stage")]
  pub stage: String,
  #[serde(default)]
  pub difficulty: Difficulty,
}

impl TransitionEdge {
  pub fn new(
    id: impl Into<String>,
    source: impl Into<String>,
    target: impl Into<String>,
    difficulty: Difficulty,
  ) -> Self {
    Self {
      id: id.into(),
      source: source.into(),
      target: target.into(),
      label: String::new(),
      stage: default_stage(),
      difficulty,
    }
  }

  pub fn with_label(mut self, label: impl Into<String>) -> Self {
    self.label = label.into();
    self
  }

  pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
    self.stage = stage.into();
    self
  }
}
