//! Priority of a roadmap step.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Priority of a roadmap step. Unknown labels read as `Recommended`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  Required,
  #[default]
  Recommended,
  Optional,
}

impl fmt::Display for Priority {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Priority::Required => write!(f, "required"),
      Priority::Recommended => write!(f, "recommended"),
      Priority::Optional => write!(f, "optional"),
    }
  }
}

impl<'de> Deserialize<'de> for Priority {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let label = String::deserialize(deserializer)?;
    Ok(match label.trim().to_ascii_lowercase().as_str() {
      "required" => Priority::Required,
      "optional" => Priority::Optional,
      _ => Priority::Recommended,
    })
  }
}
