use num_traits::float::FloatCore;
use num_traits::AsPrimitive;
use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use crate::SegmentScalar;

/// Immutable 2D point.
///
/// Equality is exact and keeps the sign of zero: `(-0.0, 0.0)` and `(0.0, 0.0)` are different
/// points, with `-0.0` ordered before `0.0`. All NaNs are equal to each other. The total order
/// (needed for canonical crossing and triangle keys) is lexicographic on `(x, y)`.
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Point<T = f32> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T: SegmentScalar> Point<T> {
  /// Widen integer coordinates to floating point.
  pub fn from_ints(x: i32, y: i32) -> Point<T>
  where
    i32: AsPrimitive<T>,
  {
    Point::new([x.as_(), y.as_()])
  }

  fn key(&self) -> [(OrderedFloat<T>, bool); 2] {
    let coord = |v: T| {
      let negative_zero = v == T::zero() && FloatCore::is_sign_negative(v);
      (OrderedFloat(v), !negative_zero)
    };
    [coord(self.array[0]), coord(self.array[1])]
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T: SegmentScalar> PartialEq for Point<T> {
  fn eq(&self, other: &Self) -> bool {
    self.key() == other.key()
  }
}

impl<T: SegmentScalar> Eq for Point<T> {}

impl<T: SegmentScalar> Hash for Point<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.key().hash(state)
  }
}

impl<T: SegmentScalar> PartialOrd for Point<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T: SegmentScalar> Ord for Point<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.key().cmp(&other.key())
  }
}
