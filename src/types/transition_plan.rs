//! A roadmap from one profession to another.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Difficulty, TransitionStep};

/// Errors for plans that break the step ordering contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
  #[error("step at position {position} has order {found}, expected {expected}")]
  StepOrder {
    position: usize,
    expected: u32,
    found: u32,
  },
  #[error("plan payload must be a JSON object")]
  NotAnObject,
}

/// A roadmap from one profession to another. Step index is `order - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionPlan {
  pub source_id: String,
  pub source_title: String,
  pub target_id: String,
  pub target_title: String,
  pub summary: String,
  pub estimated_duration: String,
  #[serde(default)]
  pub difficulty: Difficulty,
  pub steps: Vec<TransitionStep>,
  #[serde(default)]
  pub tips: Vec<String>,
}

impl TransitionPlan {
  /// Checks that step orders run exactly `1..=N` in sequence.
  pub fn validate(&self) -> Result<(), PlanError> {
    for (position, step) in self.steps.iter().enumerate() {
      let expected = position as u32 + 1;
      if step.order != expected {
        return Err(PlanError::StepOrder {
          position,
          expected,
          found: step.order,
        });
      }
    }
    Ok(())
  }

  /// Index of the terminal "finish" milestone (one past the last step).
  pub fn finish_index(&self) -> usize {
    self.steps.len()
  }
}
