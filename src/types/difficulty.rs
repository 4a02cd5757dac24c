//! Difficulty of a career transition or of a whole plan.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Ordinal difficulty attached to a transition edge or plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
  Easy,
  #[default]
  Moderate,
  Hard,
}

impl Difficulty {
  /// Parses a difficulty label case-insensitively. Unknown labels fall back to `Moderate`.
  pub fn parse_lenient(label: &str) -> Self {
    match label.trim().to_ascii_lowercase().as_str() {
      "easy" => Difficulty::Easy,
      "hard" => Difficulty::Hard,
      _ => Difficulty::Moderate,
    }
  }
}

impl fmt::Display for Difficulty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Difficulty::Easy => write!(f, "easy"),
      Difficulty::Moderate => write!(f, "moderate"),
      Difficulty::Hard => write!(f, "hard"),
    }
  }
}

impl<'de> Deserialize<'de> for Difficulty {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let label = String::deserialize(deserializer)?;
    Ok(Difficulty::parse_lenient(&label))
  }
}
