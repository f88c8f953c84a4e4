use log::{debug, trace};
use std::collections::BTreeSet;

use crate::algorithms::combinations::array_combinations;
use crate::data::{Crossing, LineSegment};
use crate::{Intersects, SegmentScalar};

/// Lazily find every pair of crossing segments.
///
/// Pairs are positional, so a segment that occurs twice in `segments` can produce the same
/// crossing twice. Use [`find_all_crossings`] for the deduplicated set.
///
/// # Time complexity
/// $O(n^2)$
pub fn segment_crossings<T: SegmentScalar>(
  segments: &[LineSegment<T>],
) -> impl Iterator<Item = Crossing<T>> + '_ {
  array_combinations::<_, 2>(segments).filter_map(|[a, b]| a.intersect(b))
}

/// Find all crossings. Fewer than two segments never cross.
///
/// ```rust
/// # use segment_triangles::algorithms::find_all_crossings;
/// # use segment_triangles::data::{Crossing, LineSegment};
/// let l1: LineSegment = LineSegment::from_int_coords(0, 0, 10, 10);
/// let l2 = LineSegment::from_int_coords(0, 10, 10, 0);
/// let crossings = find_all_crossings(&[l1, l2]);
/// assert_eq!(crossings.into_iter().collect::<Vec<_>>(), vec![Crossing::new(l2, l1)]);
/// ```
///
/// # Time complexity
/// $O(n^2 \log n)$
pub fn find_all_crossings<T: SegmentScalar>(segments: &[LineSegment<T>]) -> BTreeSet<Crossing<T>> {
  let mut result = BTreeSet::new();
  if segments.len() < 2 {
    return result;
  }
  for crossing in segment_crossings(segments) {
    if result.insert(crossing) {
      trace!("crossing: {:?}", crossing);
    }
  }
  debug!(
    "found {} crossings between {} segments",
    result.len(),
    segments.len()
  );
  result
}
