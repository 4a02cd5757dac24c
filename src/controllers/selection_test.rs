//! Tests for `SelectionController`.

use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;

use super::{EdgeActivity, NodeEmphasis, Selection, SelectionController, SelectionError};
use crate::types::{Difficulty, Profession, TransitionEdge, TransitionGraph};

fn node(id: &str) -> Profession {
  Profession::new(id, id.to_uppercase())
}

fn ids(items: &[&str]) -> BTreeSet<String> {
  items.iter().map(|s| s.to_string()).collect()
}

/// P1..P5 with P1→P2 easy, P1→P3 hard, P2→P4 moderate.
fn sample_graph() -> Arc<TransitionGraph> {
  Arc::new(TransitionGraph::load(
    ["P1", "P2", "P3", "P4", "P5"].into_iter().map(node).collect(),
    vec![
      TransitionEdge::new("e12", "P1", "P2", Difficulty::Easy),
      TransitionEdge::new("e13", "P1", "P3", Difficulty::Hard),
      TransitionEdge::new("e24", "P2", "P4", Difficulty::Moderate),
    ],
  ))
}

#[test]
fn starts_unselected_with_everything_neutral_and_active() {
  let c = SelectionController::new(sample_graph());
  assert_eq!(c.state(), &Selection::Unselected);
  assert!(c.connected_node_ids().is_empty());
  assert!(c.connected_edge_ids().is_empty());
  assert!(c.outgoing().is_empty());
  assert!(c.incoming().is_empty());
  for n in c.graph().nodes() {
    assert_eq!(c.node_emphasis(&n.id), NodeEmphasis::Neutral);
  }
  for e in c.graph().edges() {
    assert_eq!(c.edge_activity(e), EdgeActivity::Active);
    assert!(!c.is_outgoing_from_selection(e));
  }
}

#[test]
fn select_p1_highlights_its_outgoing_neighbourhood() {
  let mut c = SelectionController::new(sample_graph());
  c.select("P1").unwrap();
  assert_eq!(c.connected_node_ids(), ids(&["P1", "P2", "P3"]));
  assert_eq!(c.connected_edge_ids(), ids(&["e12", "e13"]));
  assert_eq!(c.outgoing().len(), 2);
  assert_eq!(c.incoming().len(), 0);
  assert_eq!(c.outgoing()[0].profession.id, "P2");
  assert_eq!(c.outgoing()[1].profession.id, "P3");

  assert_eq!(c.node_emphasis("P1"), NodeEmphasis::Selected);
  assert_eq!(c.node_emphasis("P2"), NodeEmphasis::Neutral);
  assert_eq!(c.node_emphasis("P4"), NodeEmphasis::Dimmed);
  assert_eq!(c.node_emphasis("P5"), NodeEmphasis::Dimmed);

  let edges = c.graph().edges().to_vec();
  assert_eq!(c.edge_activity(&edges[0]), EdgeActivity::Active);
  assert_eq!(c.edge_activity(&edges[2]), EdgeActivity::Inactive);
  assert!(c.is_outgoing_from_selection(&edges[0]));
  assert!(!c.is_outgoing_from_selection(&edges[2]));
}

#[test]
fn select_p4_after_p1() {
  let mut c = SelectionController::new(sample_graph());
  c.select("P1").unwrap();
  c.select("P4").unwrap();
  assert_eq!(c.connected_node_ids(), ids(&["P2", "P4"]));
  assert_eq!(c.connected_edge_ids(), ids(&["e24"]));
  assert_eq!(c.incoming().len(), 1);
  assert_eq!(c.incoming()[0].profession.id, "P2");
  assert_eq!(c.outgoing().len(), 0);
}

#[test]
fn selecting_same_node_twice_toggles_off() {
  let mut c = SelectionController::new(sample_graph());
  c.select("P1").unwrap();
  let state = c.select("P1").unwrap();
  assert_eq!(state, &Selection::Unselected);
  assert!(c.connected_node_ids().is_empty());
}

#[test]
fn unknown_node_is_rejected_without_state_change() {
  let mut c = SelectionController::new(sample_graph());
  c.select("P2").unwrap();
  let err = c.select("nobody").unwrap_err();
  assert_eq!(err, SelectionError::UnknownNode("nobody".to_string()));
  assert_eq!(c.selected_id(), Some("P2"));
}

#[test]
fn deselect_is_idempotent() {
  let mut c = SelectionController::new(sample_graph());
  c.deselect();
  assert_eq!(c.state(), &Selection::Unselected);
  c.select("P3").unwrap();
  c.deselect();
  c.deselect();
  assert_eq!(c.state(), &Selection::Unselected);
}

#[test]
fn duplicate_edges_give_duplicate_drill_down_entries() {
  let g = Arc::new(TransitionGraph::load(
    vec![node("a"), node("b")],
    vec![
      TransitionEdge::new("ab-early", "a", "b", Difficulty::Hard).with_stage("Early-Career"),
      TransitionEdge::new("ab-senior", "a", "b", Difficulty::Easy).with_stage("Senior"),
    ],
  ));
  let mut c = SelectionController::new(g);
  c.select("a").unwrap();
  let out = c.outgoing();
  assert_eq!(out.len(), 2);
  assert!(out.iter().all(|t| t.profession.id == "b"));
  assert_eq!(c.connected_node_ids(), ids(&["a", "b"]));
}

#[test]
fn dangling_edges_never_show_in_selection() {
  let g = Arc::new(TransitionGraph::load(
    vec![node("a"), node("b")],
    vec![
      TransitionEdge::new("ok", "a", "b", Difficulty::Easy),
      TransitionEdge::new("ghost-out", "a", "ghost", Difficulty::Easy),
      TransitionEdge::new("ghost-in", "ghost", "a", Difficulty::Easy),
    ],
  ));
  let mut c = SelectionController::new(g);
  c.select("a").unwrap();
  assert_eq!(c.connected_edge_ids(), ids(&["ok"]));
  assert_eq!(c.outgoing().len(), 1);
  assert!(c.incoming().is_empty());
  let ghost_out = c.graph().edges()[1].clone();
  assert_eq!(c.edge_activity(&ghost_out), EdgeActivity::Inactive);
}

fn arb_graph() -> impl Strategy<Value = Arc<TransitionGraph>> {
  prop::collection::vec((0usize..7, 0usize..7), 0..25).prop_map(|pairs| {
    let nodes = (0..5).map(|i| node(&format!("n{i}"))).collect();
    let edges = pairs
      .into_iter()
      .enumerate()
      .map(|(i, (s, t))| {
        TransitionEdge::new(format!("e{i}"), format!("n{s}"), format!("n{t}"), Difficulty::Moderate)
      })
      .collect();
    Arc::new(TransitionGraph::load(nodes, edges))
  })
}

type Snapshot = (Selection, BTreeSet<String>, BTreeSet<String>, Vec<String>, Vec<String>);

fn snapshot(c: &SelectionController) -> Snapshot {
  (
    c.state().clone(),
    c.connected_node_ids(),
    c.connected_edge_ids(),
    c.outgoing().iter().map(|t| t.edge.id.clone()).collect(),
    c.incoming().iter().map(|t| t.edge.id.clone()).collect(),
  )
}

proptest! {
  #[test]
  fn select_a_then_b_equals_select_b(g in arb_graph(), a in 0usize..5, b in 0usize..5) {
    prop_assume!(a != b);
    let (a, b) = (format!("n{a}"), format!("n{b}"));
    let mut via_a = SelectionController::new(g.clone());
    via_a.select(&a).unwrap();
    via_a.select(&b).unwrap();
    let mut direct = SelectionController::new(g);
    direct.select(&b).unwrap();
    prop_assert_eq!(snapshot(&via_a), snapshot(&direct));
  }

  #[test]
  fn dangling_edges_excluded_for_any_selection(g in arb_graph(), pick in 0usize..5) {
    let mut c = SelectionController::new(g);
    c.select(&format!("n{pick}")).unwrap();
    let graph = c.graph();
    let dangling: BTreeSet<String> = graph
      .edges()
      .iter()
      .filter(|e| !graph.is_resolved(e))
      .map(|e| e.id.clone())
      .collect();
    prop_assert!(c.connected_edge_ids().is_disjoint(&dangling));
    for t in c.outgoing().into_iter().chain(c.incoming()) {
      prop_assert!(!dangling.contains(&t.edge.id));
    }
  }

  #[test]
  fn dimmed_exactly_when_outside_connected_set(g in arb_graph(), pick in 0usize..5) {
    let mut c = SelectionController::new(g);
    c.select(&format!("n{pick}")).unwrap();
    let connected = c.connected_node_ids();
    for n in c.graph().nodes() {
      let dimmed = c.node_emphasis(&n.id) == NodeEmphasis::Dimmed;
      prop_assert_eq!(dimmed, !connected.contains(&n.id));
    }
  }
}
