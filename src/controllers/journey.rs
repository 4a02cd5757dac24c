//! Milestone-progress controller for a transition roadmap.
//!
//! A plan with `N` steps has `N + 1` milestones: one per step plus a terminal
//! "finish" milestone at index `N`. The controller stores only the active index and
//! the open popup; statuses and progress are recomputed on every read.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::types::{PlanError, TransitionPlan, TransitionStep};

/// Rejected milestone request. The controller state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JourneyError {
  #[error("milestone {index} is out of range 0..={finish}")]
  OutOfRange { index: usize, finish: usize },
}

/// Position within the roadmap plus the optionally open popup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JourneyState {
  pub active_index: usize,
  pub popup_index: Option<usize>,
}

/// Status of one milestone relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
  Completed,
  Active,
  Upcoming,
}

/// Content of the open popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup<'p> {
  Step(&'p TransitionStep),
  /// The finish milestone; carries the plan for target title, duration and tips.
  Finish(&'p TransitionPlan),
}

/// Status for milestone `index` given the active milestone.
pub fn milestone_status(index: usize, active_index: usize) -> MilestoneStatus {
  if index < active_index {
    MilestoneStatus::Completed
  } else if index == active_index {
    MilestoneStatus::Active
  } else {
    MilestoneStatus::Upcoming
  }
}

#[derive(Debug, Clone)]
pub struct JourneyController {
  plan: TransitionPlan,
  state: JourneyState,
}

impl JourneyController {
  /// Starts at milestone 0 with no popup. The plan's step orders must run `1..=N`.
  pub fn new(plan: TransitionPlan) -> Result<Self, PlanError> {
    plan.validate()?;
    Ok(Self {
      plan,
      state: JourneyState::default(),
    })
  }

  pub fn plan(&self) -> &TransitionPlan {
    &self.plan
  }

  pub fn state(&self) -> JourneyState {
    self.state
  }

  pub fn active_index(&self) -> usize {
    self.state.active_index
  }

  pub fn popup_index(&self) -> Option<usize> {
    self.state.popup_index
  }

  /// Index of the finish milestone.
  pub fn finish_index(&self) -> usize {
    self.plan.finish_index()
  }

  /// Number of milestones, finish included.
  pub fn milestone_count(&self) -> usize {
    self.finish_index() + 1
  }

  /// Jumps to `index` (any order is allowed) and toggles its popup.
  pub fn select_milestone(&mut self, index: usize) -> Result<JourneyState, JourneyError> {
    let finish = self.finish_index();
    if index > finish {
      return Err(JourneyError::OutOfRange { index, finish });
    }
    self.state.active_index = index;
    if self.state.popup_index == Some(index) {
      debug!(index, "milestone popup closed");
      self.state.popup_index = None;
    } else {
      debug!(index, "milestone popup opened");
      self.state.popup_index = Some(index);
    }
    Ok(self.state)
  }

  /// Closes the popup; the active milestone stays where it is.
  pub fn dismiss_popup(&mut self) {
    if let Some(index) = self.state.popup_index.take() {
      debug!(index, "milestone popup dismissed");
    }
  }

  pub fn status(&self, index: usize) -> MilestoneStatus {
    milestone_status(index, self.state.active_index)
  }

  /// One status per milestone, finish included.
  pub fn statuses(&self) -> Vec<MilestoneStatus> {
    (0..self.milestone_count()).map(|i| self.status(i)).collect()
  }

  /// Fill fraction for a progress rail: `active_index / N`, or 1.0 for a plan without steps.
  pub fn progress(&self) -> f64 {
    match self.finish_index() {
      0 => 1.0,
      n => self.state.active_index as f64 / n as f64,
    }
  }

  pub fn popup(&self) -> Option<Popup<'_>> {
    let index = self.state.popup_index?;
    match self.plan.steps.get(index) {
      Some(step) => Some(Popup::Step(step)),
      None => Some(Popup::Finish(&self.plan)),
    }
  }
}
