use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use segment_triangles::algorithms::{find_all_crossings, find_triangles};
use segment_triangles::data::LineSegment;
use segment_triangles::parse::parse_segments;

/// Count the crossing points and triangles of a set of line segments.
///
/// Each input line holds one segment as `x0 y0 x1 y1`.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
  /// Segment file. Reads stdin when omitted or `-`.
  input: Option<PathBuf>,
  /// Also print every crossing point and triangle.
  #[arg(short, long)]
  list: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
  let mut text = String::new();
  match path {
    Some(path) if path.as_os_str() != "-" => {
      text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    }
    _ => {
      std::io::stdin()
        .read_to_string(&mut text)
        .context("cannot read stdin")?;
    }
  }
  Ok(text)
}

fn main() -> Result<()> {
  env_logger::init();
  let args = Args::parse();

  let text = read_input(args.input.as_ref())?;
  let segments: Vec<LineSegment> = parse_segments(&text)?;
  info!("read {} segments", segments.len());

  let crossings = find_all_crossings(&segments);
  println!("There are {} crossing points in total", crossings.len());
  if args.list {
    for crossing in &crossings {
      match crossing.point() {
        Some(pt) => println!("  crossing at ({}, {})", pt.x_coord(), pt.y_coord()),
        None => println!("  crossing at (?, ?)"),
      }
    }
  }

  let triangles = find_triangles(&crossings);
  println!("There are {} unique triangles...", triangles.len());
  if args.list {
    for triangle in &triangles {
      let corners = match triangle.vertices() {
        Some(vertices) => vertices
          .iter()
          .map(|pt| format!("({}, {})", pt.x_coord(), pt.y_coord()))
          .collect::<Vec<_>>()
          .join(" "),
        None => String::from("(degenerate)"),
      };
      println!("  triangle {}", corners);
    }
  }

  Ok(())
}
