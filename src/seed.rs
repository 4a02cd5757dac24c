//! Built-in seed content: a small, fully resolved transition graph.

use crate::types::{Difficulty, Profession, TransitionEdge, TransitionGraph};

fn profession(id: &str, title: &str, icon: &str, description: &str, tags: &[&str]) -> Profession {
  Profession {
    id: id.to_string(),
    title: title.to_string(),
    short_description: description.to_string(),
    icon: icon.to_string(),
    tags: tags.iter().map(|t| t.to_string()).collect(),
  }
}

pub fn seed_professions() -> Vec<Profession> {
  vec![
    profession(
      "software-engineer",
      "Software Engineer",
      "💻",
      "Designs, builds and maintains software systems, from mobile apps to cloud services.",
      &["Technology", "Engineering", "Problem-Solving", "Remote-Friendly"],
    ),
    profession(
      "data-scientist",
      "Data Scientist",
      "📊",
      "Extracts insight from complex datasets with statistics and machine learning.",
      &["Analytics", "Machine Learning", "Statistics", "Research"],
    ),
    profession(
      "devops-engineer",
      "DevOps / Cloud Engineer",
      "☁",
      "Automates deployments and runs the cloud infrastructure products depend on.",
      &["Cloud", "Automation", "Infrastructure", "CI/CD"],
    ),
    profession(
      "product-manager",
      "Product Manager",
      "🚀",
      "Decides what gets built and why, balancing users, business and technology.",
      &["Product", "Strategy", "Leadership", "User-Centric"],
    ),
    profession(
      "ux-designer",
      "UX / Graphic Designer",
      "🎨",
      "Shapes how products look and feel through research, interaction and visual design.",
      &["Design", "Creativity", "User Research", "Visual Arts"],
    ),
    profession(
      "research-scientist",
      "Research Scientist",
      "🔬",
      "Pushes the frontier of a field through experiments, papers and collaboration.",
      &["Research", "Science", "Academia", "Innovation"],
    ),
    profession(
      "teacher-educator",
      "Teacher / Educator",
      "📚",
      "Designs curricula and guides learners from classrooms to corporate training.",
      &["Education", "Mentoring", "Curriculum Design", "Leadership"],
    ),
    profession(
      "entrepreneur",
      "Entrepreneur / Founder",
      "💡",
      "Starts and scales new ventures, taking ideas from zero to a working business.",
      &["Startup", "Leadership", "Innovation", "Risk-Taking"],
    ),
  ]
}

pub fn seed_edges() -> Vec<TransitionEdge> {
  use Difficulty::{Easy, Hard, Moderate};
  [
    ("se-ds", "software-engineer", "data-scientist", "ML & analytics skills", "Mid-Career", Moderate),
    ("se-pm", "software-engineer", "product-manager", "Tech leadership path", "Senior", Easy),
    ("se-ux", "software-engineer", "ux-designer", "Frontend to UX pivot", "Mid-Career", Moderate),
    ("se-dv", "software-engineer", "devops-engineer", "Infrastructure focus", "Mid-Career", Easy),
    ("se-en", "software-engineer", "entrepreneur", "Tech founder path", "Senior", Moderate),
    ("ds-se", "data-scientist", "software-engineer", "ML engineering focus", "Mid-Career", Easy),
    ("ds-pm", "data-scientist", "product-manager", "Data-driven product", "Senior", Moderate),
    ("ds-rs", "data-scientist", "research-scientist", "Research focus", "Mid-Career", Moderate),
    ("dv-se", "devops-engineer", "software-engineer", "Platform engineering", "Mid-Career", Easy),
    ("pm-se", "product-manager", "software-engineer", "Technical PM return", "Mid-Career", Moderate),
    ("pm-ux", "product-manager", "ux-designer", "Product design", "Mid-Career", Moderate),
    ("pm-en", "product-manager", "entrepreneur", "Startup founder", "Senior", Moderate),
    ("ux-se", "ux-designer", "software-engineer", "Design engineering", "Mid-Career", Moderate),
    ("ux-pm", "ux-designer", "product-manager", "Design-led product", "Senior", Easy),
    ("rs-ds", "research-scientist", "data-scientist", "Applied ML research", "Mid-Career", Easy),
    ("rs-te", "research-scientist", "teacher-educator", "Academic teaching", "Senior", Easy),
    ("rs-pm", "research-scientist", "product-manager", "R&D product lead", "Senior", Moderate),
    ("rs-en", "research-scientist", "entrepreneur", "DeepTech startup", "Senior", Hard),
    ("te-ux", "teacher-educator", "ux-designer", "Instructional design", "Mid-Career", Moderate),
    ("te-pm", "teacher-educator", "product-manager", "EdTech product", "Mid-Career", Moderate),
    ("en-pm", "entrepreneur", "product-manager", "Product leadership", "Mid-Career", Easy),
    ("en-te", "entrepreneur", "teacher-educator", "Startup mentoring", "Senior", Easy),
  ]
  .into_iter()
  .map(|(id, source, target, label, stage, difficulty)| {
    TransitionEdge::new(id, source, target, difficulty)
      .with_label(label)
      .with_stage(stage)
  })
  .collect()
}

pub fn seed_graph() -> TransitionGraph {
  TransitionGraph::load(seed_professions(), seed_edges())
}
