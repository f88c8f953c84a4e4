use claims::debug_assert_ok;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::{LineSegment, Point};
use crate::{Error, SegmentScalar};

/// Unordered pair of segments that cross.
///
/// The pair is stored with the smaller segment first so `Crossing::new(a, b)` and
/// `Crossing::new(b, a)` are the same value.
#[derive(Clone, Copy)]
#[non_exhaustive]
pub struct Crossing<T = f32> {
  pub min: LineSegment<T>,
  pub max: LineSegment<T>,
}

impl<T: SegmentScalar> std::fmt::Debug for Crossing<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    f.debug_tuple("Crossing")
      .field(&self.min)
      .field(&self.max)
      .finish()
  }
}

impl<T: SegmentScalar> Crossing<T> {
  pub fn new(a: LineSegment<T>, b: LineSegment<T>) -> Crossing<T> {
    let crossing = Crossing::new_unchecked(a, b);
    debug_assert_ok!(crossing.validate());
    crossing
  }

  pub fn try_new(a: LineSegment<T>, b: LineSegment<T>) -> Result<Crossing<T>, Error> {
    let crossing = Crossing::new_unchecked(a, b);
    crossing.validate()?;
    Ok(crossing)
  }

  pub fn new_unchecked(a: LineSegment<T>, b: LineSegment<T>) -> Crossing<T> {
    if a <= b {
      Crossing { min: a, max: b }
    } else {
      Crossing { min: b, max: a }
    }
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.min.crosses(&self.max) {
      Ok(())
    } else {
      Err(Error::NonCrossingSegments)
    }
  }

  pub fn segments(&self) -> [&LineSegment<T>; 2] {
    [&self.min, &self.max]
  }

  pub fn contains(&self, segment: &LineSegment<T>) -> bool {
    &self.min == segment || &self.max == segment
  }

  /// Segments that belong to both crossings.
  pub fn shared_segments<'a>(
    &'a self,
    other: &'a Crossing<T>,
  ) -> impl Iterator<Item = &'a LineSegment<T>> + 'a {
    self
      .segments()
      .into_iter()
      .filter(move |segment| other.contains(segment))
  }

  /// Where the supporting lines of the two segments meet.
  ///
  /// Returns `None` if the lines are parallel in floating point arithmetic, which can only
  /// happen for crossings built with `new_unchecked`.
  pub fn point(&self) -> Option<Point<T>> {
    let (a1, b1) = self.min.coefficients();
    let (a2, b2) = self.max.coefficients();
    let det = a1 * b2 - a2 * b1;
    if det == T::zero() {
      return None;
    }
    let m1 = self.min.midpoint();
    let m2 = self.max.midpoint();
    let c1 = a1 * *m1.x_coord() + b1 * *m1.y_coord();
    let c2 = a2 * *m2.x_coord() + b2 * *m2.y_coord();
    Some(Point::new([
      (c1 * b2 - c2 * b1) / det,
      (a1 * c2 - a2 * c1) / det,
    ]))
  }
}

impl<T: SegmentScalar> PartialEq for Crossing<T> {
  fn eq(&self, other: &Self) -> bool {
    self.min == other.min && self.max == other.max
  }
}

impl<T: SegmentScalar> Eq for Crossing<T> {}

impl<T: SegmentScalar> Hash for Crossing<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.min.hash(state);
    self.max.hash(state);
  }
}

impl<T: SegmentScalar> PartialOrd for Crossing<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T: SegmentScalar> Ord for Crossing<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    self
      .min
      .cmp(&other.min)
      .then_with(|| self.max.cmp(&other.max))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;
  use proptest::prelude::*;
  use std::collections::HashSet;
  use test_strategy::proptest;

  #[proptest]
  fn unordered_pair(
    #[strategy(any_segment())] l1: LineSegment,
    #[strategy(any_segment())] l2: LineSegment,
  ) {
    let ab = Crossing::new_unchecked(l1, l2);
    let ba = Crossing::new_unchecked(l2, l1);
    prop_assert_eq!(ab, ba);
    let set: HashSet<_> = vec![ab, ba].into_iter().collect();
    prop_assert_eq!(set.len(), 1);
  }

  #[proptest]
  fn try_new_agrees_with_crosses(
    #[strategy(any_segment())] l1: LineSegment,
    #[strategy(any_segment())] l2: LineSegment,
  ) {
    prop_assert_eq!(Crossing::try_new(l1, l2).is_ok(), l1.crosses(&l2));
  }

  #[test]
  fn rejects_non_crossing() {
    let l1 = segment(0, 0, 10, 10);
    let l2 = segment(0, 1, 10, 11);
    assert_eq!(Crossing::try_new(l1, l2), Err(Error::NonCrossingSegments));
  }

  #[test]
  fn crossing_point() {
    let crossing = Crossing::new(segment(0, 0, 10, 10), segment(0, 10, 10, 0));
    assert_eq!(crossing.point(), Some(Point::new([5.0, 5.0])));
  }

  #[test]
  fn touching_crossing_point() {
    let crossing = Crossing::new(segment(0, 0, 0, 200), segment(0, 0, 120, 0));
    assert_eq!(crossing.point(), Some(Point::new([0.0, 0.0])));
  }

  #[test]
  fn parallel_has_no_point() {
    let crossing = Crossing::new_unchecked(segment(0, 0, 10, 10), segment(0, 1, 10, 11));
    assert_eq!(crossing.point(), None);
  }

  #[test]
  fn shared_segments() {
    let [l1, l2, l3] = triangle_segments();
    let c12 = Crossing::new(l1, l2);
    let c23 = Crossing::new(l2, l3);
    assert_eq!(c12.shared_segments(&c23).collect::<Vec<_>>(), vec![&l2]);
    assert_eq!(c12.shared_segments(&c12).count(), 2);
    assert!(c12.contains(&l1));
    assert!(!c12.contains(&l3));
  }
}
