//! A profession: one node of the transition graph.

use serde::{Deserialize, Serialize};

/// A profession: one node of the transition graph. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profession {
  /// Slug-style identifier, e.g. `software-engineer`.
  pub id: String,
  pub title: String,
  pub short_description: String,
  #[serde(default, rename = "icon_emoji")]
  pub icon: String,
  #[serde(default)]
  pub tags: Vec<String>,
}

impl Profession {
  pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      short_description: String::new(),
      icon: String::new(),
      tags: vec![],
    }
  }
}
