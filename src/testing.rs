// Strategies for:
//  * points
//  * segments
//  * crossings
// Coordinates are small integers so that every side value is computed exactly.
use crate::algorithms::find_all_crossings;
use crate::data::{Crossing, LineSegment, Point};

use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::BTreeSet;

pub fn any_point() -> impl Strategy<Value = Point> {
  (-20..=20i8, -20..=20i8).prop_map(|(x, y)| Point::new([f32::from(x), f32::from(y)]))
}

pub fn any_segment() -> impl Strategy<Value = LineSegment> {
  (any_point(), any_point()).prop_map(|(p0, p1)| LineSegment::new(p0, p1))
}

pub fn any_segments(max_len: usize) -> impl Strategy<Value = Vec<LineSegment>> {
  vec(any_segment(), 0..max_len)
}

pub fn any_crossings(max_segments: usize) -> impl Strategy<Value = BTreeSet<Crossing>> {
  any_segments(max_segments).prop_map(|segments| find_all_crossings(&segments))
}

pub fn segment(x0: i32, y0: i32, x1: i32, y1: i32) -> LineSegment {
  LineSegment::from_int_coords(x0, y0, x1, y1)
}

// A plain triangle of three segments whose corners all touch.
pub fn triangle_segments() -> [LineSegment; 3] {
  [
    segment(0, 0, 10, 0),
    segment(10, 0, 5, 10),
    segment(5, 10, 0, 0),
  ]
}
