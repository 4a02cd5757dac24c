//! Step categories and their presentation style.

use serde::Serialize;

/// Icon symbol and accent colour for a roadmap milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
  pub icon: &'static str,
  /// Hex colour, e.g. `#6366f1`.
  pub color: &'static str,
}

/// Style for categories nothing else matches.
pub const DEFAULT_STYLE: CategoryStyle = CategoryStyle {
  icon: "📌",
  color: "#64748b",
};

/// Known step categories. Labels that match none of them are `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepCategory {
  Education,
  Certification,
  Course,
  Skill,
  Experience,
  Networking,
  Portfolio,
  Other,
}

impl StepCategory {
  pub fn from_label(label: &str) -> Self {
    match label.trim().to_ascii_lowercase().as_str() {
      "education" => StepCategory::Education,
      "certification" => StepCategory::Certification,
      "course" => StepCategory::Course,
      "skill" => StepCategory::Skill,
      "experience" => StepCategory::Experience,
      "networking" => StepCategory::Networking,
      "portfolio" => StepCategory::Portfolio,
      _ => StepCategory::Other,
    }
  }

  pub fn style(self) -> CategoryStyle {
    match self {
      StepCategory::Education => CategoryStyle {
        icon: "🎓",
        color: "#6366f1",
      },
      StepCategory::Certification => CategoryStyle {
        icon: "📜",
        color: "#f59e0b",
      },
      StepCategory::Course => CategoryStyle {
        icon: "📚",
        color: "#3b82f6",
      },
      StepCategory::Skill => CategoryStyle {
        icon: "🛠",
        color: "#10b981",
      },
      StepCategory::Experience => CategoryStyle {
        icon: "💼",
        color: "#8b5cf6",
      },
      StepCategory::Networking => CategoryStyle {
        icon: "🤝",
        color: "#ec4899",
      },
      StepCategory::Portfolio => CategoryStyle {
        icon: "🗂",
        color: "#14b8a6",
      },
      StepCategory::Other => DEFAULT_STYLE,
    }
  }
}
