//! One step of a transition roadmap.

use serde::{Deserialize, Serialize};

use super::{Priority, StepCategory};

/// One step of a transition roadmap. `order` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionStep {
  pub order: u32,
  pub title: String,
  /// Open-ended label; see [TransitionStep::category_kind].
  pub category: String,
  pub duration: String,
  pub description: String,
  #[serde(default)]
  pub resources: Vec<String>,
  #[serde(default)]
  pub priority: Priority,
}

impl TransitionStep {
  pub fn category_kind(&self) -> StepCategory {
    StepCategory::from_label(&self.category)
  }
}
