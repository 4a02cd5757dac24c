//! # career-transitions
//!
//! Career transition explorer core: a profession-to-profession transition graph with
//! indexed adjacency queries, a deterministic elliptical layout, and the view-state
//! controllers behind the graph explorer and the step-by-step roadmap.
//!
//! ## Architecture
//!
//! Content arrives once per view from a [ContentSource] (`types` → `content_source`).
//! Each view owns one controller (`controllers`) and derives every emphasis tag,
//! status and drill-down list from the controller's minimal state on render (`view`).

pub mod content_source;
pub mod controllers;
pub mod layout;
pub mod plan_payload;
pub mod seed;
pub mod types;
pub mod view;
#[cfg(test)]
mod view_test;

pub use content_source::{ContentError, ContentSource, FileContentSource, SeedContentSource};
pub use controllers::{JourneyController, SelectionController};
pub use layout::{LayoutConfig, compute_elliptical_positions};
pub use types::{Profession, TransitionEdge, TransitionGraph, TransitionPlan, TransitionStep};
pub use view::{GraphEvent, GraphView, RoadmapEvent, RoadmapView};
