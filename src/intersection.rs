use crate::data::{Crossing, LineSegment};
use crate::SegmentScalar;

pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}

/// ```rust
/// # use segment_triangles::data::LineSegment;
/// # use segment_triangles::Intersects;
/// let l1: LineSegment = LineSegment::from_int_coords(0, 0, 10, 10);
/// let l2 = LineSegment::from_int_coords(0, 10, 10, 0);
/// let crossing = l1.intersect(&l2).expect("segments cross");
/// assert!(crossing.contains(&l1) && crossing.contains(&l2));
/// ```
impl<'a, T: SegmentScalar> Intersects<&'a LineSegment<T>> for &'a LineSegment<T> {
  type Result = Crossing<T>;
  fn intersect(self, other: &'a LineSegment<T>) -> Option<Self::Result> {
    if self.crosses(other) {
      Some(Crossing::new_unchecked(*self, *other))
    } else {
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[proptest]
  fn flip_intersects_prop(
    #[strategy(any_segment())] l1: LineSegment,
    #[strategy(any_segment())] l2: LineSegment,
  ) {
    prop_assert_eq!(l1.intersect(&l2), l2.intersect(&l1));
  }

  #[test]
  fn line_not_crossing() {
    assert_eq!(segment(0, 0, 1, 0).intersect(&segment(1, 1, 0, 1)), None)
  }
}
