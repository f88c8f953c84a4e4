//! Plain text segment lists.
//!
//! One segment per line, written as four whitespace separated numbers `x0 y0 x1 y1`. Blank
//! lines are ignored.
//!
//! ```rust
//! # use segment_triangles::parse::parse_segments;
//! # use segment_triangles::data::LineSegment;
//! let segments: Vec<LineSegment> = parse_segments("0 0 10 10\n\n0.0 10.0 10.0 0.0\n").unwrap();
//! let expected: LineSegment = LineSegment::from_int_coords(0, 10, 10, 0);
//! assert_eq!(segments[1], expected);
//! ```
use array_init::try_array_init;
use num_traits::Float;
use std::str::FromStr;

use crate::data::LineSegment;
use crate::{Error, SegmentScalar};

/// Parse every line of `input`.
///
/// Stops at the first malformed line. Line numbers in errors start at 1.
pub fn parse_segments<T>(input: &str) -> Result<Vec<LineSegment<T>>, Error>
where
  T: SegmentScalar + FromStr,
{
  let mut segments = Vec::new();
  for (idx, line) in input.lines().enumerate() {
    if let Some(segment) = parse_line(idx + 1, line)? {
      segments.push(segment);
    }
  }
  Ok(segments)
}

/// Parse a single line. `Ok(None)` for blank lines.
pub fn parse_line<T>(line_no: usize, line: &str) -> Result<Option<LineSegment<T>>, Error>
where
  T: SegmentScalar + FromStr,
{
  let tokens: Vec<&str> = line.split_whitespace().collect();
  if tokens.is_empty() {
    return Ok(None);
  }
  if tokens.len() != 4 {
    return Err(Error::TokenCount {
      line: line_no,
      found: tokens.len(),
    });
  }
  let [x0, y0, x1, y1]: [T; 4] = try_array_init(|i| {
    let invalid = Error::InvalidNumber {
      line: line_no,
      column: i + 1,
    };
    // Infinities and NaN parse fine but have no place in a segment.
    match tokens[i].parse::<T>() {
      Ok(value) if Float::is_finite(value) => Ok(value),
      _ => Err(invalid),
    }
  })?;
  Ok(Some(LineSegment::from_coords(x0, y0, x1, y1)))
}
