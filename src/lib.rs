// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Crossing points and triangles in a set of line segments.
//!
//! Two segments *cross* when each one separates the endpoints of the other. Three crossings
//! form a *triangle* when, between them, they use exactly three segments and every segment is
//! shared by two of the crossings.
//!
//! ```rust
//! # use segment_triangles::algorithms::{count_triangles, find_all_crossings};
//! # use segment_triangles::data::LineSegment;
//! let segments: [LineSegment; 6] = [
//!   LineSegment::from_int_coords(0, 0, 0, 200),
//!   LineSegment::from_int_coords(0, 0, 120, 0),
//!   LineSegment::from_int_coords(120, 0, 0, 200),
//!   LineSegment::from_int_coords(0, 20, 100, 180),
//!   LineSegment::from_int_coords(20, 0, 50, 180),
//!   LineSegment::from_int_coords(100, 0, 50, 180),
//! ];
//! let crossings = find_all_crossings(&segments);
//! assert_eq!(crossings.len(), 12);
//! assert_eq!(count_triangles(&crossings), 9);
//! ```
use num_traits::float::FloatCore;
use num_traits::Float;

pub mod algorithms;
pub mod data;
mod intersection;
mod orientation;
pub mod parse;

pub use intersection::Intersects;
pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The two segments of a crossing do not cross.
  NonCrossingSegments,
  /// Three crossings do not close into a 3-cycle of segments.
  NotATriangle,
  /// A line of input did not hold exactly four coordinates.
  TokenCount { line: usize, found: usize },
  /// A coordinate could not be read as a number.
  InvalidNumber { line: usize, column: usize },
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::NonCrossingSegments => write!(f, "Segments do not cross"),
      Error::NotATriangle => write!(f, "Crossings do not form a triangle"),
      Error::TokenCount { line, found } => write!(
        f,
        "Parse error on line {}: expected 4 coordinates, found {}",
        line, found
      ),
      Error::InvalidNumber { line, column } => write!(
        f,
        "Parse error on line {}: coordinate {} is not a number",
        line, column
      ),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate type of points and segments.
///
/// Comparisons are exact. There is no epsilon anywhere in this crate, so `f32` and `f64`
/// inputs can judge the same segments differently.
pub trait SegmentScalar: Float + FloatCore + std::fmt::Debug + 'static {}

impl<T> SegmentScalar for T where T: Float + FloatCore + std::fmt::Debug + 'static {}

#[cfg(test)]
pub mod testing;
