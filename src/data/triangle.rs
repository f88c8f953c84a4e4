use array_init::try_array_init;
use claims::debug_assert_ok;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use super::{Crossing, LineSegment, Point};
use crate::algorithms::is_triangle;
use crate::{Error, SegmentScalar};

/// Three crossings that close into a 3-cycle of segments.
///
/// The crossings are kept sorted, so a triangle is identified by the *set* of its crossings and
/// not by the order they were found in.
#[derive(Clone, Copy)]
pub struct Triangle<T = f32>([Crossing<T>; 3]);

impl<T: SegmentScalar> Triangle<T> {
  pub fn new(crossings: [Crossing<T>; 3]) -> Triangle<T> {
    let triangle = Triangle::new_unchecked(crossings);
    debug_assert_ok!(triangle.validate());
    triangle
  }

  pub fn new_unchecked(mut crossings: [Crossing<T>; 3]) -> Triangle<T> {
    crossings.sort_unstable();
    Triangle(crossings)
  }

  /// `Some` iff the three crossings form a triangle.
  pub fn try_new(c1: &Crossing<T>, c2: &Crossing<T>, c3: &Crossing<T>) -> Option<Triangle<T>> {
    if is_triangle(c1, c2, c3) {
      Some(Triangle::new_unchecked([*c1, *c2, *c3]))
    } else {
      None
    }
  }

  pub fn validate(&self) -> Result<(), Error> {
    let [c1, c2, c3] = &self.0;
    if is_triangle(c1, c2, c3) {
      Ok(())
    } else {
      Err(Error::NotATriangle)
    }
  }

  pub fn crossings(&self) -> &[Crossing<T>; 3] {
    &self.0
  }

  /// The three segments that make up the sides.
  pub fn segments(&self) -> BTreeSet<&LineSegment<T>> {
    let [c1, c2, c3] = &self.0;
    c1.shared_segments(c2)
      .chain(c2.shared_segments(c3))
      .chain(c3.shared_segments(c1))
      .collect()
  }

  /// Corner points, one per crossing.
  pub fn vertices(&self) -> Option<[Point<T>; 3]> {
    try_array_init(|i| self.0[i].point().ok_or(())).ok()
  }
}

impl<T: SegmentScalar> std::fmt::Debug for Triangle<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    f.debug_tuple("Triangle")
      .field(&self.0[0])
      .field(&self.0[1])
      .field(&self.0[2])
      .finish()
  }
}

impl<T: SegmentScalar> PartialEq for Triangle<T> {
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0
  }
}

impl<T: SegmentScalar> Eq for Triangle<T> {}

impl<T: SegmentScalar> Hash for Triangle<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.0.hash(state)
  }
}

impl<T: SegmentScalar> PartialOrd for Triangle<T> {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl<T: SegmentScalar> Ord for Triangle<T> {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self.0.cmp(&other.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  fn sides() -> [Crossing; 3] {
    let [l1, l2, l3] = triangle_segments();
    [
      Crossing::new(l1, l2),
      Crossing::new(l2, l3),
      Crossing::new(l3, l1),
    ]
  }

  #[test]
  fn identified_by_set_of_crossings() {
    let [c1, c2, c3] = sides();
    assert_eq!(Triangle::new([c1, c2, c3]), Triangle::new([c3, c1, c2]));
    assert_eq!(
      Triangle::try_new(&c2, &c1, &c3),
      Some(Triangle::new([c1, c2, c3]))
    );
  }

  #[test]
  fn connecting_segments() {
    let [c1, c2, c3] = sides();
    let triangle = Triangle::new([c1, c2, c3]);
    let segments = triangle_segments();
    assert_eq!(triangle.segments(), segments.iter().collect::<BTreeSet<_>>());
  }

  #[test]
  fn corners() {
    let [c1, c2, c3] = sides();
    let mut vertices = Triangle::new([c1, c2, c3])
      .vertices()
      .expect("sides are not parallel");
    vertices.sort();
    assert_eq!(
      vertices,
      [
        Point::new([0.0, 0.0]),
        Point::new([5.0, 10.0]),
        Point::new([10.0, 0.0]),
      ]
    );
  }

  #[test]
  fn star_is_not_a_triangle() {
    // Three segments through a common segment: every crossing shares `hub`.
    let hub = segment(0, 0, 100, 0);
    let c1 = Crossing::new(hub, segment(10, -10, 10, 10));
    let c2 = Crossing::new(hub, segment(20, -10, 20, 10));
    let c3 = Crossing::new(hub, segment(30, -10, 30, 10));
    assert_eq!(Triangle::try_new(&c1, &c2, &c3), None);
    assert_eq!(
      Triangle::new_unchecked([c1, c2, c3]).validate(),
      Err(Error::NotATriangle)
    );
  }
}
