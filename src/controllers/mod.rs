//! View-state controllers. Each owns only its minimal state and derives emphasis on read.

pub mod journey;
pub mod selection;
#[cfg(test)]
mod selection_test;

pub use journey::{JourneyController, JourneyError, JourneyState, MilestoneStatus, Popup};
pub use selection::{
  EdgeActivity, NodeEmphasis, Selection, SelectionController, SelectionError, Transition,
};
