//! Profession-to-profession transition graph with adjacency indices.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use super::{Profession, TransitionEdge};

/// Wire shape of a transition graph as delivered by a content source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphPayload {
  pub nodes: Vec<Profession>,
  pub edges: Vec<TransitionEdge>,
}

/// Profession nodes plus transition edges, indexed for adjacency queries.
///
/// Edges whose source or target is not a known node are kept in [TransitionGraph::edges]
/// but left out of every index, so no query ever returns them.
#[derive(Debug, Clone, Default)]
pub struct TransitionGraph {
  nodes: Vec<Profession>,
  edges: Vec<TransitionEdge>,
  node_index: HashMap<String, usize>,
  /// Positions into `edges`, in input order, per source id.
  by_source: HashMap<String, Vec<usize>>,
  /// Positions into `edges`, in input order, per target id.
  by_target: HashMap<String, Vec<usize>>,
}

impl TransitionGraph {
  /// Builds the node index and both adjacency indices.
  ///
  /// A later node with a duplicate id replaces the earlier one in the index.
  #[instrument(level = "trace", skip(nodes, edges), fields(nodes = nodes.len(), edges = edges.len()))]
  pub fn load(nodes: Vec<Profession>, edges: Vec<TransitionEdge>) -> Self {
    let node_index: HashMap<String, usize> = nodes
      .iter()
      .enumerate()
      .map(|(i, n)| (n.id.clone(), i))
      .collect();

    let mut by_source: HashMap<String, Vec<usize>> = HashMap::new();
    let mut by_target: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, edge) in edges.iter().enumerate() {
      let source_known = node_index.contains_key(&edge.source);
      let target_known = node_index.contains_key(&edge.target);
      if !(source_known && target_known) {
        warn!(
          edge_id = %edge.id,
          source = %edge.source,
          target = %edge.target,
          source_known,
          target_known,
          "dangling transition edge excluded from queries"
        );
        continue;
      }
      by_source.entry(edge.source.clone()).or_default().push(i);
      by_target.entry(edge.target.clone()).or_default().push(i);
    }

    Self {
      nodes,
      edges,
      node_index,
      by_source,
      by_target,
    }
  }

  pub fn from_payload(payload: GraphPayload) -> Self {
    Self::load(payload.nodes, payload.edges)
  }

  /// Nodes in input order.
  pub fn nodes(&self) -> &[Profession] {
    &self.nodes
  }

  /// All edges in input order, dangling ones included.
  pub fn edges(&self) -> &[TransitionEdge] {
    &self.edges
  }

  pub fn node(&self, id: &str) -> Option<&Profession> {
    self.node_index.get(id).map(|&i| &self.nodes[i])
  }

  pub fn contains(&self, id: &str) -> bool {
    self.node_index.contains_key(id)
  }

  /// True when both endpoints resolve to known nodes.
  pub fn is_resolved(&self, edge: &TransitionEdge) -> bool {
    self.contains(&edge.source) && self.contains(&edge.target)
  }

  /// Edges leaving `node_id`, in input order.
  pub fn edges_from(&self, node_id: &str) -> Vec<&TransitionEdge> {
    self.bucket(&self.by_source, node_id)
  }

  /// Edges entering `node_id`, in input order.
  pub fn edges_to(&self, node_id: &str) -> Vec<&TransitionEdge> {
    self.bucket(&self.by_target, node_id)
  }

  /// Node ids one edge away from `node_id` in either direction, excluding `node_id`.
  #[instrument(level = "trace", skip(self))]
  pub fn neighbors(&self, node_id: &str) -> BTreeSet<String> {
    let outgoing = self.edges_from(node_id).into_iter().map(|e| &e.target);
    let incoming = self.edges_to(node_id).into_iter().map(|e| &e.source);
    outgoing
      .chain(incoming)
      .filter(|id| id.as_str() != node_id)
      .cloned()
      .collect()
  }

  fn bucket(&self, index: &HashMap<String, Vec<usize>>, node_id: &str) -> Vec<&TransitionEdge> {
    index
      .get(node_id)
      .map(|positions| positions.iter().map(|&i| &self.edges[i]).collect())
      .unwrap_or_default()
  }
}
