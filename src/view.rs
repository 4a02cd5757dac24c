//! Presentation boundary: views that fetch content once, own one controller each,
//! accept discrete input events and render serializable frames.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use crate::content_source::{ContentError, ContentSource};
use crate::controllers::{
  EdgeActivity, JourneyController, JourneyError, JourneyState, MilestoneStatus, NodeEmphasis,
  Popup, Selection, SelectionController, SelectionError, Transition,
};
use crate::layout::LayoutConfig;
use crate::types::{CategoryStyle, Difficulty, Point, Priority, Profession, TransitionGraph};

/// Input events accepted by [GraphView].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphEvent {
  NodeClicked(String),
  PaneClicked,
}

/// Input events accepted by [RoadmapView].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapEvent {
  MilestoneClicked(usize),
  PopupDismissed,
}

/// A rejected event. Rejections never change view state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
  #[error(transparent)]
  Selection(#[from] SelectionError),
  #[error(transparent)]
  Journey(#[from] JourneyError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeFrame {
  pub id: String,
  pub title: String,
  pub icon: String,
  pub position: Point,
  pub emphasis: NodeEmphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeFrame {
  pub id: String,
  pub source: String,
  pub target: String,
  pub label: String,
  pub stage: String,
  pub difficulty: Difficulty,
  pub activity: EdgeActivity,
  pub outgoing_from_selection: bool,
}

/// One entry of the drill-down panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionEntry {
  pub edge_id: String,
  pub profession_id: String,
  pub profession_title: String,
  pub icon: String,
  pub label: String,
  pub stage: String,
  pub difficulty: Difficulty,
}

impl From<Transition<'_>> for TransitionEntry {
  fn from(t: Transition<'_>) -> Self {
    Self {
      edge_id: t.edge.id.clone(),
      profession_id: t.profession.id.clone(),
      profession_title: t.profession.title.clone(),
      icon: t.profession.icon.clone(),
      label: t.edge.label.clone(),
      stage: t.edge.stage.clone(),
      difficulty: t.edge.difficulty,
    }
  }
}

/// Drill-down panel for the selected profession.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrillDown {
  pub profession: Profession,
  pub outgoing: Vec<TransitionEntry>,
  pub incoming: Vec<TransitionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphFrame {
  pub nodes: Vec<NodeFrame>,
  pub edges: Vec<EdgeFrame>,
  pub panel: Option<DrillDown>,
}

/// Graph explorer view: elliptical layout plus node selection.
#[derive(Debug, Clone)]
pub struct GraphView {
  positions: Vec<Point>,
  selection: SelectionController,
}

impl GraphView {
  /// Fetches the graph; no controller exists unless the fetch succeeds.
  #[instrument(level = "trace", skip(source))]
  pub async fn open(
    source: &dyn ContentSource,
    layout: LayoutConfig,
  ) -> Result<Self, ContentError> {
    let graph = source.fetch_graph().await?;
    info!(nodes = graph.nodes().len(), "graph view opened");
    Ok(Self::new(Arc::new(graph), layout))
  }

  pub fn new(graph: Arc<TransitionGraph>, layout: LayoutConfig) -> Self {
    let positions = layout.positions(graph.nodes().len());
    Self {
      positions,
      selection: SelectionController::new(graph),
    }
  }

  pub fn selection(&self) -> &SelectionController {
    &self.selection
  }

  pub fn handle(&mut self, event: GraphEvent) -> Result<&Selection, EventError> {
    match event {
      GraphEvent::NodeClicked(id) => Ok(self.selection.select(&id)?),
      GraphEvent::PaneClicked => {
        self.selection.deselect();
        Ok(self.selection.state())
      }
    }
  }

  pub fn render(&self) -> GraphFrame {
    let c = &self.selection;
    let graph = c.graph();
    let nodes = graph
      .nodes()
      .iter()
      .zip(&self.positions)
      .map(|(p, &position)| NodeFrame {
        id: p.id.clone(),
        title: p.title.clone(),
        icon: p.icon.clone(),
        position,
        emphasis: c.node_emphasis(&p.id),
      })
      .collect();
    let edges = graph
      .edges()
      .iter()
      .filter(|e| graph.is_resolved(e))
      .map(|e| EdgeFrame {
        id: e.id.clone(),
        source: e.source.clone(),
        target: e.target.clone(),
        label: e.label.clone(),
        stage: e.stage.clone(),
        difficulty: e.difficulty,
        activity: c.edge_activity(e),
        outgoing_from_selection: c.is_outgoing_from_selection(e),
      })
      .collect();
    let panel = c.selected().map(|profession| DrillDown {
      profession: profession.clone(),
      outgoing: c.outgoing().into_iter().map(TransitionEntry::from).collect(),
      incoming: c.incoming().into_iter().map(TransitionEntry::from).collect(),
    });
    GraphFrame {
      nodes,
      edges,
      panel,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestoneFrame {
  pub index: usize,
  pub title: String,
  pub status: MilestoneStatus,
  pub style: CategoryStyle,
  pub is_finish: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PopupContent {
  Step {
    index: usize,
    title: String,
    category: String,
    duration: String,
    description: String,
    resources: Vec<String>,
    priority: Priority,
  },
  Finish {
    target_title: String,
    estimated_duration: String,
    tips: Vec<String>,
  },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapFrame {
  pub source_title: String,
  pub target_title: String,
  pub summary: String,
  pub difficulty: Difficulty,
  pub milestones: Vec<MilestoneFrame>,
  pub progress: f64,
  pub popup: Option<PopupContent>,
}

/// Finish milestone style.
const FINISH_STYLE: CategoryStyle = CategoryStyle {
  icon: "🏁",
  color: "#22c55e",
};

/// Roadmap view: one plan plus milestone progress.
#[derive(Debug, Clone)]
pub struct RoadmapView {
  journey: JourneyController,
}

impl RoadmapView {
  /// Fetches the plan for `(from, to)`; no controller exists unless the fetch succeeds.
  #[instrument(level = "trace", skip(source))]
  pub async fn open(source: &dyn ContentSource, from: &str, to: &str) -> Result<Self, ContentError> {
    let plan = source.fetch_plan(from, to).await?;
    info!(steps = plan.steps.len(), "roadmap view opened");
    Ok(Self {
      journey: JourneyController::new(plan)?,
    })
  }

  pub fn new(journey: JourneyController) -> Self {
    Self { journey }
  }

  pub fn journey(&self) -> &JourneyController {
    &self.journey
  }

  pub fn handle(&mut self, event: RoadmapEvent) -> Result<JourneyState, EventError> {
    match event {
      RoadmapEvent::MilestoneClicked(index) => Ok(self.journey.select_milestone(index)?),
      RoadmapEvent::PopupDismissed => {
        self.journey.dismiss_popup();
        Ok(self.journey.state())
      }
    }
  }

  pub fn render(&self) -> RoadmapFrame {
    let j = &self.journey;
    let plan = j.plan();
    let mut milestones: Vec<MilestoneFrame> = plan
      .steps
      .iter()
      .enumerate()
      .map(|(index, step)| MilestoneFrame {
        index,
        title: step.title.clone(),
        status: j.status(index),
        style: step.category_kind().style(),
        is_finish: false,
      })
      .collect();
    let finish = j.finish_index();
    milestones.push(MilestoneFrame {
      index: finish,
      title: plan.target_title.clone(),
      status: j.status(finish),
      style: FINISH_STYLE,
      is_finish: true,
    });

    let popup = j.popup().map(|popup| match popup {
      Popup::Step(step) => PopupContent::Step {
        index: step.order as usize - 1,
        title: step.title.clone(),
        category: step.category.clone(),
        duration: step.duration.clone(),
        description: step.description.clone(),
        resources: step.resources.clone(),
        priority: step.priority,
      },
      Popup::Finish(plan) => PopupContent::Finish {
        target_title: plan.target_title.clone(),
        estimated_duration: plan.estimated_duration.clone(),
        tips: plan.tips.clone(),
      },
    });

    RoadmapFrame {
      source_title: plan.source_title.clone(),
      target_title: plan.target_title.clone(),
      summary: plan.summary.clone(),
      difficulty: plan.difficulty,
      milestones,
      progress: j.progress(),
      popup,
    }
  }
}
