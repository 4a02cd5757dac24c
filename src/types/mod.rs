//! Career transition content types: professions, edges, the indexed graph and roadmaps.

mod difficulty;
mod point;
mod priority;
mod profession;
mod step_category;
mod transition_edge;
mod transition_graph;
mod transition_plan;
mod transition_step;

pub use difficulty::Difficulty;
pub use point::Point;
pub use priority::Priority;
pub use profession::Profession;
pub use step_category::{CategoryStyle, DEFAULT_STYLE, StepCategory};
pub use transition_edge::{DEFAULT_STAGE, TransitionEdge};
pub use transition_graph::{GraphPayload, TransitionGraph};
pub use transition_plan::{PlanError, TransitionPlan};
pub use transition_step::TransitionStep;
