use num_traits::AsPrimitive;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use super::Point;
use crate::{Orientation, SegmentScalar};

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// Finite line segment between `p0` and `p1`.
///
/// The supporting line is kept in the implicit form `a(x-xm) + b(y-ym) = 0` where
/// `a = y1-y0`, `b = x0-x1` and `(xm, ym)` is the midpoint. These are computed once by the
/// constructor and are never stored independently of the endpoints.
///
/// Segments compare, hash and order by their endpoints *in construction order*: `p0..p1` and
/// `p1..p0` cross exactly the same segments but are different values.
#[derive(Debug, Clone, Copy)]
pub struct LineSegment<T = f32> {
  p0: Point<T>,
  p1: Point<T>,
  midpoint: Point<T>,
  a: T,
  b: T,
}

impl<T: SegmentScalar> LineSegment<T> {
  pub fn new(p0: Point<T>, p1: Point<T>) -> LineSegment<T> {
    let two = T::one() + T::one();
    let midpoint = Point::new([
      (*p0.x_coord() + *p1.x_coord()) / two,
      (*p0.y_coord() + *p1.y_coord()) / two,
    ]);
    LineSegment {
      p0,
      p1,
      midpoint,
      a: *p1.y_coord() - *p0.y_coord(),
      b: *p0.x_coord() - *p1.x_coord(),
    }
  }

  pub fn from_coords(x0: T, y0: T, x1: T, y1: T) -> LineSegment<T> {
    LineSegment::new(Point::new([x0, y0]), Point::new([x1, y1]))
  }

  /// Build a segment from integer coordinates, widened to `T`.
  ///
  /// ```rust
  /// # use segment_triangles::data::LineSegment;
  /// let l1: LineSegment = LineSegment::from_int_coords(0, 0, 10, 10);
  /// assert_eq!(l1, LineSegment::from_coords(0.0, 0.0, 10.0, 10.0));
  /// ```
  pub fn from_int_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> LineSegment<T>
  where
    i32: AsPrimitive<T>,
  {
    LineSegment::new(Point::from_ints(x0, y0), Point::from_ints(x1, y1))
  }

  pub fn p0(&self) -> &Point<T> {
    &self.p0
  }

  pub fn p1(&self) -> &Point<T> {
    &self.p1
  }

  pub fn midpoint(&self) -> &Point<T> {
    &self.midpoint
  }

  /// Coefficients `(a, b)` of the supporting line.
  pub fn coefficients(&self) -> (T, T) {
    (self.a, self.b)
  }

  /// Zero-length segments have no supporting line and never cross anything.
  pub fn is_degenerate(&self) -> bool {
    self.p0 == self.p1
  }

  /// Value of the line equation at `pt`. Zero iff `pt` is on the supporting line (in
  /// floating point).
  pub fn side_value(&self, pt: &Point<T>) -> T {
    self.a * (*pt.x_coord() - *self.midpoint.x_coord())
      + self.b * (*pt.y_coord() - *self.midpoint.y_coord())
  }

  pub fn side_of(&self, pt: &Point<T>) -> Orientation {
    Orientation::from_side_value(self.side_value(pt))
  }

  // A side value of exactly zero differs from both signs, so an endpoint touching the line
  // still counts as being on a different side than a strictly positive/negative endpoint.
  fn separates(&self, other: &LineSegment<T>) -> bool {
    self.side_of(&other.p0) != self.side_of(&other.p1)
  }

  /// True iff the endpoints of each segment are on different sides of the other segment's
  /// line.
  ///
  /// Collinear segments never cross, even when they overlap.
  ///
  /// ```rust
  /// # use segment_triangles::data::LineSegment;
  /// let l1: LineSegment = LineSegment::from_int_coords(0, 0, 10, 10);
  /// let l2 = LineSegment::from_int_coords(0, 10, 10, 0);
  /// let l3 = LineSegment::from_int_coords(0, 1, 10, 11);
  /// assert!(l1.crosses(&l2));
  /// assert!(!l1.crosses(&l3));
  /// ```
  pub fn crosses(&self, other: &LineSegment<T>) -> bool {
    self.separates(other) && other.separates(self)
  }

  #[must_use]
  pub fn reversed(&self) -> LineSegment<T> {
    LineSegment::new(self.p1, self.p0)
  }
}

impl<T: SegmentScalar> From<Range<Point<T>>> for LineSegment<T> {
  fn from(range: Range<Point<T>>) -> LineSegment<T> {
    LineSegment::new(range.start, range.end)
  }
}

impl<T: SegmentScalar> From<Range<(T, T)>> for LineSegment<T> {
  fn from(range: Range<(T, T)>) -> LineSegment<T> {
    LineSegment::new(range.start.into(), range.end.into())
  }
}

impl<T: SegmentScalar> PartialEq for LineSegment<T> {
  fn eq(&self, other: &Self) -> bool {
    self.p0 == other.p0 && self.p1 == other.p1
  }
}

impl<T: SegmentScalar> Eq for LineSegment<T> {}

impl<T: SegmentScalar> Hash for LineSegment<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.p0.hash(state);
    self.p1.hash(state);
  }
}

impl<T: SegmentScalar> PartialOrd for LineSegment<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T: SegmentScalar> Ord for LineSegment<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    self
      .p0
      .cmp(&other.p0)
      .then_with(|| self.p1.cmp(&other.p1))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
