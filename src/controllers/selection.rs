//! Single-selection highlight controller for the transition graph.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::types::{Profession, TransitionEdge, TransitionGraph};

/// Rejected selection request. The controller state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
  #[error("unknown profession id: {0}")]
  UnknownNode(String),
}

/// Current selection of the graph view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
  #[default]
  Unselected,
  Selected(String),
}

impl Selection {
  pub fn id(&self) -> Option<&str> {
    match self {
      Selection::Unselected => None,
      Selection::Selected(id) => Some(id),
    }
  }
}

/// Visual emphasis of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeEmphasis {
  Selected,
  Dimmed,
  Neutral,
}

/// Whether an edge belongs to the highlighted neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeActivity {
  Active,
  Inactive,
}

impl fmt::Display for NodeEmphasis {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NodeEmphasis::Selected => write!(f, "selected"),
      NodeEmphasis::Dimmed => write!(f, "dimmed"),
      NodeEmphasis::Neutral => write!(f, "neutral"),
    }
  }
}

/// A transition edge paired with the profession at its other end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<'g> {
  pub edge: &'g TransitionEdge,
  pub profession: &'g Profession,
}

/// Owns the selection state; every highlight is derived from it on read.
#[derive(Debug, Clone)]
pub struct SelectionController {
  graph: Arc<TransitionGraph>,
  state: Selection,
}

impl SelectionController {
  pub fn new(graph: Arc<TransitionGraph>) -> Self {
    Self {
      graph,
      state: Selection::Unselected,
    }
  }

  pub fn graph(&self) -> &TransitionGraph {
    &self.graph
  }

  pub fn state(&self) -> &Selection {
    &self.state
  }

  pub fn selected_id(&self) -> Option<&str> {
    self.state.id()
  }

  pub fn selected(&self) -> Option<&Profession> {
    self.selected_id().and_then(|id| self.graph.node(id))
  }

  /// Node click: selects `node_id`, or clears the selection when it is already selected.
  pub fn select(&mut self, node_id: &str) -> Result<&Selection, SelectionError> {
    if !self.graph.contains(node_id) {
      warn!(node_id, "selection of unknown profession rejected");
      return Err(SelectionError::UnknownNode(node_id.to_string()));
    }
    if self.selected_id() == Some(node_id) {
      debug!(node_id, "selection toggled off");
      self.state = Selection::Unselected;
    } else {
      debug!(node_id, "node selected");
      self.state = Selection::Selected(node_id.to_string());
    }
    Ok(&self.state)
  }

  /// Background click. Idempotent.
  pub fn deselect(&mut self) {
    if let Selection::Selected(id) = &self.state {
      debug!(node_id = %id, "selection cleared");
    }
    self.state = Selection::Unselected;
  }

  /// The selected node plus its one-hop neighbours; empty when nothing is selected.
  #[instrument(level = "trace", skip(self))]
  pub fn connected_node_ids(&self) -> BTreeSet<String> {
    match self.selected_id() {
      None => BTreeSet::new(),
      Some(id) => {
        let mut ids = self.graph.neighbors(id);
        ids.insert(id.to_string());
        ids
      }
    }
  }

  /// Ids of edges touching the selected node; empty when nothing is selected.
  #[instrument(level = "trace", skip(self))]
  pub fn connected_edge_ids(&self) -> BTreeSet<String> {
    match self.selected_id() {
      None => BTreeSet::new(),
      Some(id) => self
        .graph
        .edges_from(id)
        .into_iter()
        .chain(self.graph.edges_to(id))
        .map(|e| e.id.clone())
        .collect(),
    }
  }

  /// Transitions leaving the selection, each with its target profession.
  pub fn outgoing(&self) -> Vec<Transition<'_>> {
    let Some(id) = self.selected_id() else {
      return vec![];
    };
    self
      .graph
      .edges_from(id)
      .into_iter()
      .filter_map(|edge| {
        let profession = self.graph.node(&edge.target)?;
        Some(Transition { edge, profession })
      })
      .collect()
  }

  /// Transitions entering the selection, each with its source profession.
  pub fn incoming(&self) -> Vec<Transition<'_>> {
    let Some(id) = self.selected_id() else {
      return vec![];
    };
    self
      .graph
      .edges_to(id)
      .into_iter()
      .filter_map(|edge| {
        let profession = self.graph.node(&edge.source)?;
        Some(Transition { edge, profession })
      })
      .collect()
  }

  pub fn node_emphasis(&self, node_id: &str) -> NodeEmphasis {
    match self.selected_id() {
      None => NodeEmphasis::Neutral,
      Some(id) if id == node_id => NodeEmphasis::Selected,
      Some(_) if self.connected_node_ids().contains(node_id) => NodeEmphasis::Neutral,
      Some(_) => NodeEmphasis::Dimmed,
    }
  }

  pub fn edge_activity(&self, edge: &TransitionEdge) -> EdgeActivity {
    if self.selected_id().is_none() || self.connected_edge_ids().contains(&edge.id) {
      EdgeActivity::Active
    } else {
      EdgeActivity::Inactive
    }
  }

  /// Presentation hint: the edge leaves the selected node.
  pub fn is_outgoing_from_selection(&self, edge: &TransitionEdge) -> bool {
    self.selected_id() == Some(edge.source.as_str())
  }
}
