//! Tests for graph and roadmap views.

use std::sync::Arc;

use crate::content_source::{ContentError, SeedContentSource};
use crate::controllers::{
  EdgeActivity, JourneyController, JourneyError, MilestoneStatus, NodeEmphasis, Selection,
  SelectionError,
};
use crate::layout::LayoutConfig;
use crate::plan_payload::fallback_plan;
use crate::types::{Difficulty, Profession, TransitionEdge, TransitionGraph};
use crate::view::{EventError, GraphEvent, GraphView, PopupContent, RoadmapEvent, RoadmapView};

fn small_graph() -> Arc<TransitionGraph> {
  Arc::new(TransitionGraph::load(
    vec![
      Profession::new("a", "A"),
      Profession::new("b", "B"),
      Profession::new("c", "C"),
    ],
    vec![
      TransitionEdge::new("ab", "a", "b", Difficulty::Easy),
      TransitionEdge::new("ab2", "a", "b", Difficulty::Hard),
      TransitionEdge::new("ca", "c", "a", Difficulty::Moderate),
      TransitionEdge::new("bx", "b", "missing", Difficulty::Moderate),
    ],
  ))
}

#[test]
fn graph_frame_unselected() {
  let view = GraphView::new(small_graph(), LayoutConfig::default());
  let frame = view.render();
  assert_eq!(frame.nodes.len(), 3);
  assert_eq!(frame.nodes[0].position.x, 600.0);
  assert_eq!(frame.nodes[0].position.y, 80.0);
  assert!(frame.nodes.iter().all(|n| n.emphasis == NodeEmphasis::Neutral));
  // dangling edge is not rendered
  assert_eq!(frame.edges.len(), 3);
  assert!(frame.edges.iter().all(|e| e.activity == EdgeActivity::Active));
  assert!(frame.panel.is_none());
}

#[test]
fn graph_frame_with_selection_and_panel() {
  let mut view = GraphView::new(small_graph(), LayoutConfig::default());
  view.handle(GraphEvent::NodeClicked("b".to_string())).unwrap();
  let frame = view.render();
  let emphasis: Vec<NodeEmphasis> = frame.nodes.iter().map(|n| n.emphasis).collect();
  assert_eq!(
    emphasis,
    vec![NodeEmphasis::Neutral, NodeEmphasis::Selected, NodeEmphasis::Dimmed]
  );
  let panel = frame.panel.unwrap();
  assert_eq!(panel.profession.id, "b");
  assert!(panel.outgoing.is_empty());
  assert_eq!(panel.incoming.len(), 2);
  assert!(panel.incoming.iter().all(|t| t.profession_id == "a"));
  let ca = frame.edges.iter().find(|e| e.id == "ca").unwrap();
  assert_eq!(ca.activity, EdgeActivity::Inactive);
}

#[test]
fn outgoing_flag_marks_edges_leaving_selection() {
  let mut view = GraphView::new(small_graph(), LayoutConfig::default());
  view.handle(GraphEvent::NodeClicked("a".to_string())).unwrap();
  let frame = view.render();
  for e in &frame.edges {
    assert_eq!(e.outgoing_from_selection, e.source == "a", "{}", e.id);
    assert_eq!(e.activity, EdgeActivity::Active);
  }
}

#[test]
fn pane_click_and_toggle_clear_selection() {
  let mut view = GraphView::new(small_graph(), LayoutConfig::default());
  view.handle(GraphEvent::NodeClicked("a".to_string())).unwrap();
  assert_eq!(view.handle(GraphEvent::PaneClicked).unwrap(), &Selection::Unselected);
  view.handle(GraphEvent::NodeClicked("c".to_string())).unwrap();
  let state = view.handle(GraphEvent::NodeClicked("c".to_string())).unwrap();
  assert_eq!(state, &Selection::Unselected);
}

#[test]
fn unknown_node_event_is_rejected() {
  let mut view = GraphView::new(small_graph(), LayoutConfig::default());
  view.handle(GraphEvent::NodeClicked("a".to_string())).unwrap();
  let err = view
    .handle(GraphEvent::NodeClicked("missing".to_string()))
    .unwrap_err();
  assert_eq!(
    err,
    EventError::Selection(SelectionError::UnknownNode("missing".to_string()))
  );
  assert_eq!(view.selection().selected_id(), Some("a"));
}

#[tokio::test]
async fn graph_view_opens_from_seed() {
  let view = GraphView::open(&SeedContentSource, LayoutConfig::default())
    .await
    .unwrap();
  assert_eq!(view.render().nodes.len(), 8);
}

fn roadmap() -> RoadmapView {
  let plan = fallback_plan(&Profession::new("a", "A"), &Profession::new("b", "B"));
  RoadmapView::new(JourneyController::new(plan).unwrap())
}

#[test]
fn roadmap_frame_has_finish_milestone() {
  let frame = roadmap().render();
  assert_eq!(frame.milestones.len(), 7);
  let finish = frame.milestones.last().unwrap();
  assert!(finish.is_finish);
  assert_eq!(finish.index, 6);
  assert_eq!(finish.title, "B");
  assert_eq!(frame.milestones[0].status, MilestoneStatus::Active);
  assert_eq!(frame.progress, 0.0);
  assert!(frame.popup.is_none());
}

#[test]
fn roadmap_step_popup_then_dismiss() {
  let mut view = roadmap();
  view.handle(RoadmapEvent::MilestoneClicked(2)).unwrap();
  let frame = view.render();
  assert_eq!(frame.progress, 2.0 / 6.0);
  assert_eq!(frame.milestones[1].status, MilestoneStatus::Completed);
  match frame.popup {
    Some(PopupContent::Step { index, ref title, .. }) => {
      assert_eq!(index, 2);
      assert_eq!(title, "Build Foundation Skills");
    }
    ref other => panic!("expected step popup, got {other:?}"),
  }
  let state = view.handle(RoadmapEvent::PopupDismissed).unwrap();
  assert_eq!(state.active_index, 2);
  assert!(view.render().popup.is_none());
}

#[test]
fn roadmap_finish_popup_lists_tips() {
  let mut view = roadmap();
  view.handle(RoadmapEvent::MilestoneClicked(6)).unwrap();
  let frame = view.render();
  assert_eq!(frame.progress, 1.0);
  match frame.popup {
    Some(PopupContent::Finish { tips, target_title, .. }) => {
      assert_eq!(target_title, "B");
      assert_eq!(tips.len(), 3);
    }
    other => panic!("expected finish popup, got {other:?}"),
  }
}

#[test]
fn roadmap_out_of_range_click_rejected() {
  let mut view = roadmap();
  let err = view.handle(RoadmapEvent::MilestoneClicked(7)).unwrap_err();
  assert_eq!(
    err,
    EventError::Journey(JourneyError::OutOfRange { index: 7, finish: 6 })
  );
  assert_eq!(view.journey().active_index(), 0);
}

#[tokio::test]
async fn roadmap_view_fetch_failure_builds_no_view() {
  let r = RoadmapView::open(&SeedContentSource, "software-engineer", "astronaut").await;
  assert!(matches!(r, Err(ContentError::UnknownProfession(_))));
}

#[test]
fn serialized_frame_uses_lowercase_tags() {
  let mut view = roadmap();
  view.handle(RoadmapEvent::MilestoneClicked(0)).unwrap();
  let v = serde_json::to_value(view.render()).unwrap();
  assert_eq!(v["milestones"][0]["status"], "active");
  assert_eq!(v["popup"]["kind"], "step");
  assert_eq!(v["popup"]["priority"], "required");
}
