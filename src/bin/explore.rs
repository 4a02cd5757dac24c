//! CLI: open the transition graph (and optionally a roadmap), replay clicks, print frames.
//!
//! Usage: `explore [OPTIONS]`
//! Example: explore --select software-engineer --from software-engineer --to data-scientist --milestone 2
//!
//! Frames are printed to stdout as pretty JSON.
//!
//! Set RUST_LOG=career_transitions=trace for TRACE-level span enter/exit and events.

use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::process;

use career_transitions::view::{GraphFrame, RoadmapFrame};
use career_transitions::{
  ContentSource, FileContentSource, GraphEvent, GraphView, LayoutConfig, RoadmapEvent, RoadmapView,
  SeedContentSource,
};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Replays `--select` values equal to this as a background click.
const PANE_CLICK: &str = "-";

/// Explore the career transition graph and roadmaps.
#[derive(Parser, Debug)]
#[command(name = "explore")]
#[command(
  after_help = r#"Environment variables (override the matching flag when set):
  CAREER_CONTENT_DIR    Directory with graph.json and plans/<from>__to__<to>.json.
                        When neither this nor --content-dir is set, the built-in seed graph is used.

Examples:
  explore --select software-engineer
  explore --select data-scientist --select - --from data-scientist --to product-manager --milestone 3"#
)]
struct Args {
  /// Content directory. Overridden by CAREER_CONTENT_DIR if set.
  #[arg(long, value_name = "DIR")]
  content_dir: Option<PathBuf>,

  /// Node click to replay, in order. `-` replays a background click.
  #[arg(long = "select", value_name = "ID")]
  select: Vec<String>,

  /// Source profession of the roadmap to open.
  #[arg(long, value_name = "ID", requires = "to")]
  from: Option<String>,

  /// Target profession of the roadmap to open.
  #[arg(long, value_name = "ID", requires = "from")]
  to: Option<String>,

  /// Milestone click to replay, in order.
  #[arg(long = "milestone", value_name = "IDX")]
  milestone: Vec<usize>,

  /// Dismiss the milestone popup after replaying clicks.
  #[arg(long)]
  dismiss: bool,

  #[arg(long)]
  center_x: Option<f64>,
  #[arg(long)]
  center_y: Option<f64>,
  #[arg(long)]
  radius_x: Option<f64>,
  #[arg(long)]
  radius_y: Option<f64>,
}

impl Args {
  fn layout(&self) -> LayoutConfig {
    let mut layout = LayoutConfig::default();
    if let Some(x) = self.center_x {
      layout.center.x = x;
    }
    if let Some(y) = self.center_y {
      layout.center.y = y;
    }
    if let Some(rx) = self.radius_x {
      layout.radius_x = rx;
    }
    if let Some(ry) = self.radius_y {
      layout.radius_y = ry;
    }
    layout
  }
}

#[derive(Serialize)]
struct Output {
  graph: GraphFrame,
  #[serde(skip_serializing_if = "Option::is_none")]
  roadmap: Option<RoadmapFrame>,
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  info!("explore starting");
  let args = Args::parse();

  let content_dir = env::var("CAREER_CONTENT_DIR")
    .ok()
    .map(PathBuf::from)
    .or_else(|| args.content_dir.clone());
  info!(content_dir = ?content_dir, "options (env or flags)");

  let source: Box<dyn ContentSource> = match content_dir {
    Some(dir) => Box::new(FileContentSource::new(dir)),
    None => Box::new(SeedContentSource),
  };

  let mut graph_view = match GraphView::open(source.as_ref(), args.layout()).await {
    Ok(v) => v,
    Err(e) => {
      eprintln!("Error loading transition graph: {}", e);
      process::exit(1);
    }
  };
  for id in &args.select {
    let event = if id == PANE_CLICK {
      GraphEvent::PaneClicked
    } else {
      GraphEvent::NodeClicked(id.clone())
    };
    if let Err(e) = graph_view.handle(event) {
      warn!(error = %e, "node click ignored");
    }
  }

  let roadmap = match (&args.from, &args.to) {
    (Some(from), Some(to)) => {
      let mut view = match RoadmapView::open(source.as_ref(), from, to).await {
        Ok(v) => v,
        Err(e) => {
          eprintln!("Error loading transition plan {} -> {}: {}", from, to, e);
          process::exit(1);
        }
      };
      for &index in &args.milestone {
        if let Err(e) = view.handle(RoadmapEvent::MilestoneClicked(index)) {
          warn!(error = %e, "milestone click ignored");
        }
      }
      if args.dismiss {
        let _ = view.handle(RoadmapEvent::PopupDismissed);
      }
      Some(view.render())
    }
    _ => None,
  };

  let output = Output {
    graph: graph_view.render(),
    roadmap,
  };
  match serde_json::to_string_pretty(&output) {
    Ok(json) => println!("{}", json),
    Err(e) => {
      eprintln!("Error encoding frames: {}", e);
      process::exit(1);
    }
  }
}
