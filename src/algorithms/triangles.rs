use log::{debug, trace};
use std::collections::BTreeSet;

use crate::algorithms::combinations::array_combinations;
use crate::algorithms::find_all_crossings;
use crate::data::{Crossing, LineSegment, Triangle};
use crate::SegmentScalar;

/// True iff the three crossings form a triangle: the segments they share pairwise are exactly
/// three distinct segments.
///
/// ```rust
/// # use segment_triangles::algorithms::is_triangle;
/// # use segment_triangles::data::{Crossing, LineSegment};
/// let l1: LineSegment = LineSegment::from_int_coords(0, 0, 10, 0);
/// let l2 = LineSegment::from_int_coords(10, 0, 5, 10);
/// let l3 = LineSegment::from_int_coords(5, 10, 0, 0);
/// let c12 = Crossing::new(l1, l2);
/// let c23 = Crossing::new(l2, l3);
/// let c31 = Crossing::new(l3, l1);
/// assert!(is_triangle(&c12, &c23, &c31));
/// assert!(!is_triangle(&c12, &c23, &c23));
/// ```
pub fn is_triangle<T: SegmentScalar>(
  c1: &Crossing<T>,
  c2: &Crossing<T>,
  c3: &Crossing<T>,
) -> bool {
  let mut connecting: BTreeSet<&LineSegment<T>> = BTreeSet::new();
  connecting.extend(c1.shared_segments(c2));
  if connecting.is_empty() {
    return false;
  }
  connecting.extend(c2.shared_segments(c3));
  if connecting.len() < 2 {
    return false;
  }
  connecting.extend(c3.shared_segments(c1));
  connecting.len() == 3
}

/// Every distinct triangle among `crossings`.
///
/// # Time complexity
/// $O(k^3 \log k)$ for $k$ crossings.
pub fn find_triangles<T: SegmentScalar>(
  crossings: &BTreeSet<Crossing<T>>,
) -> BTreeSet<Triangle<T>> {
  let crossings: Vec<Crossing<T>> = crossings.iter().copied().collect();
  let mut triangles = BTreeSet::new();
  for [c1, c2, c3] in array_combinations::<_, 3>(&crossings) {
    if let Some(triangle) = Triangle::try_new(c1, c2, c3) {
      if triangles.insert(triangle) {
        trace!("triangle: {:?}", triangle);
      }
    }
  }
  debug!(
    "found {} triangles between {} crossings",
    triangles.len(),
    crossings.len()
  );
  triangles
}

/// Number of distinct triangles among `crossings`.
pub fn count_triangles<T: SegmentScalar>(crossings: &BTreeSet<Crossing<T>>) -> usize {
  find_triangles(crossings).len()
}

/// Number of distinct triangles formed by crossing `segments`.
pub fn count_segment_triangles<T: SegmentScalar>(segments: &[LineSegment<T>]) -> usize {
  count_triangles(&find_all_crossings(segments))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn no_segments() {
    let segments: Vec<LineSegment> = vec![];
    assert_eq!(count_segment_triangles(&segments), 0);
  }

  #[test]
  fn single_triangle() {
    assert_eq!(count_segment_triangles(&triangle_segments()), 1);
  }

  #[test]
  fn complete_quadrilateral() {
    // Four lines in general position: every triple of lines is a triangle.
    let segments = [
      segment(-100, 0, 100, 0),
      segment(0, -100, 0, 100),
      segment(-100, -90, 90, 100),
      segment(-50, 100, 100, -50),
    ];
    let crossings = find_all_crossings(&segments);
    assert_eq!(crossings.len(), 6);
    assert_eq!(count_triangles(&crossings), 4);
  }

  #[test]
  fn concurrent_lines_still_count() {
    // The three crossings coincide but still form a 3-cycle of segments.
    let segments = [
      segment(-10, 0, 10, 0),
      segment(0, -10, 0, 10),
      segment(-10, -10, 10, 10),
    ];
    assert_eq!(count_segment_triangles(&segments), 1);
  }

  #[test]
  fn comb_has_no_triangles() {
    let mut segments = vec![segment(0, 0, 100, 0)];
    for x in (10..100).step_by(10) {
      segments.push(segment(x, -10, x, 10));
    }
    let crossings = find_all_crossings(&segments);
    assert_eq!(crossings.len(), 9);
    assert_eq!(count_triangles(&crossings), 0);
  }

  #[test]
  fn triangle_segments_are_sides() {
    let crossings = find_all_crossings(&triangle_segments());
    let triangles = find_triangles(&crossings);
    assert_eq!(triangles.len(), 1);
    for triangle in &triangles {
      assert_eq!(triangle.segments().len(), 3);
      assert!(triangle.validate().is_ok());
    }
  }

  #[proptest]
  fn matches_brute_force(#[strategy(any_crossings(9))] crossings: BTreeSet<Crossing>) {
    let crossings_vec: Vec<&Crossing> = crossings.iter().collect();
    let k = crossings_vec.len();
    let mut expected = 0;
    for i in 0..k {
      for j in i + 1..k {
        for l in j + 1..k {
          let mut segments: BTreeSet<&LineSegment> = BTreeSet::new();
          for c in &[crossings_vec[i], crossings_vec[j], crossings_vec[l]] {
            segments.extend(c.segments());
          }
          // Three distinct crossings over exactly three segments are a 3-cycle.
          if segments.len() == 3 {
            expected += 1;
          }
        }
      }
    }
    prop_assert_eq!(count_triangles(&crossings), expected);
  }

  #[proptest]
  fn input_order_is_irrelevant(#[strategy(any_segments(10))] segments: Vec<LineSegment>) {
    let mut reversed = segments.clone();
    reversed.reverse();
    prop_assert_eq!(
      count_segment_triangles(&segments),
      count_segment_triangles(&reversed)
    );
  }

  #[proptest]
  fn idempotent(#[strategy(any_segments(10))] segments: Vec<LineSegment>) {
    let first = find_all_crossings(&segments);
    prop_assert_eq!(&first, &find_all_crossings(&segments));
    prop_assert_eq!(count_triangles(&first), count_triangles(&first));
  }
}
