//! Assemble a [TransitionPlan] from loosely shaped generated content.
//!
//! Generated payloads may omit fields or contain malformed steps. Missing fields get
//! defaults, malformed steps are skipped, and survivors are renumbered `1..=N` so the
//! result always passes [TransitionPlan::validate].

use serde_json::Value;
use tracing::{instrument, warn};

use crate::types::{Difficulty, PlanError, Priority, Profession, TransitionPlan, TransitionStep};

pub const DEFAULT_ESTIMATED_DURATION: &str = "1-2 years";

fn default_tips() -> Vec<String> {
  vec![
    "Leverage your transferable skills from your current role.".to_string(),
    "Network with professionals already in the target field.".to_string(),
    "Start with small projects to build portfolio evidence.".to_string(),
  ]
}

fn string_field(payload: &Value, key: &str) -> Option<String> {
  payload.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Builds a plan from a JSON object payload.
#[instrument(level = "trace", skip(payload, source, target), fields(source = %source.id, target = %target.id))]
pub fn plan_from_payload(
  payload: &Value,
  source: &Profession,
  target: &Profession,
) -> Result<TransitionPlan, PlanError> {
  if !payload.is_object() {
    return Err(PlanError::NotAnObject);
  }

  let mut steps: Vec<TransitionStep> = payload
    .get("steps")
    .and_then(Value::as_array)
    .map(|raw| {
      raw
        .iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<TransitionStep>(value.clone()) {
          Ok(step) => Some(step),
          Err(e) => {
            warn!(index, error = %e, "skipping invalid transition step");
            None
          }
        })
        .collect()
    })
    .unwrap_or_default();
  steps.sort_by_key(|s| s.order);
  for (i, step) in steps.iter_mut().enumerate() {
    step.order = i as u32 + 1;
  }

  let tips = payload
    .get("tips")
    .and_then(Value::as_array)
    .map(|t| t.iter().filter_map(Value::as_str).map(str::to_string).collect())
    .unwrap_or_else(default_tips);

  Ok(TransitionPlan {
    source_id: source.id.clone(),
    source_title: source.title.clone(),
    target_id: target.id.clone(),
    target_title: target.title.clone(),
    summary: string_field(payload, "summary")
      .unwrap_or_else(|| format!("Transition from {} to {}.", source.title, target.title)),
    estimated_duration: string_field(payload, "estimated_duration")
      .unwrap_or_else(|| DEFAULT_ESTIMATED_DURATION.to_string()),
    difficulty: string_field(payload, "difficulty")
      .map(|d| Difficulty::parse_lenient(&d))
      .unwrap_or_default(),
    steps,
    tips,
  })
}

fn fallback_step(
  order: u32,
  title: &str,
  category: &str,
  duration: &str,
  description: &str,
  resources: &[&str],
  priority: Priority,
) -> TransitionStep {
  TransitionStep {
    order,
    title: title.to_string(),
    category: category.to_string(),
    duration: duration.to_string(),
    description: description.to_string(),
    resources: resources.iter().map(|r| r.to_string()).collect(),
    priority,
  }
}

/// Generic six-step plan used when no usable generated content exists.
pub fn fallback_plan(source: &Profession, target: &Profession) -> TransitionPlan {
  TransitionPlan {
    source_id: source.id.clone(),
    source_title: source.title.clone(),
    target_id: target.id.clone(),
    target_title: target.title.clone(),
    summary: format!(
      "Transitioning from {} to {} requires learning new skills while leveraging your existing experience.",
      source.title, target.title
    ),
    estimated_duration: DEFAULT_ESTIMATED_DURATION.to_string(),
    difficulty: Difficulty::Moderate,
    steps: vec![
      fallback_step(
        1,
        "Assess Transferable Skills",
        "Skill",
        "1-2 weeks",
        "Identify skills from your current role that transfer to the new career.",
        &["LinkedIn Skills Assessment"],
        Priority::Required,
      ),
      fallback_step(
        2,
        "Research the Target Field",
        "Education",
        "2-4 weeks",
        "Learn about the day-to-day, required qualifications, and job market for the target profession.",
        &["Bureau of Labor Statistics", "LinkedIn Career Explorer"],
        Priority::Required,
      ),
      fallback_step(
        3,
        "Build Foundation Skills",
        "Course",
        "3-6 months",
        "Take courses to build the core skills required for the new profession.",
        &["Coursera", "Udemy", "edX"],
        Priority::Required,
      ),
      fallback_step(
        4,
        "Earn a Relevant Certification",
        "Certification",
        "2-4 months",
        "Get certified to validate your new skills and improve your resume.",
        &[],
        Priority::Recommended,
      ),
      fallback_step(
        5,
        "Build a Portfolio",
        "Portfolio",
        "2-3 months",
        "Create projects that demonstrate your new skills to potential employers.",
        &["GitHub", "Personal Website"],
        Priority::Required,
      ),
      fallback_step(
        6,
        "Network in the New Field",
        "Networking",
        "Ongoing",
        "Attend meetups, conferences, and connect with professionals in your target field.",
        &["LinkedIn", "Meetup.com"],
        Priority::Recommended,
      ),
    ],
    tips: vec![
      "Start small and take on side projects before making the full switch.".to_string(),
      "Find a mentor in the target profession.".to_string(),
      "Update your resume to highlight transferable skills.".to_string(),
    ],
  }
}
