use crate::SegmentScalar;

/// Side of a directed line that a point lies on.
///
/// This is the three-valued sign of a side value: zero is a distinct outcome and never equal to
/// either of the other two.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Classify the value of the implicit line equation `a(x-xm) + b(y-ym)` at some point.
  ///
  /// With `a = y1-y0` and `b = x0-x1`, a positive value means the point is to the right of the
  /// direction `p0 -> p1` and a negative value means it is to the left.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use segment_triangles::Orientation;
  /// assert!(Orientation::from_side_value(-2.5_f32).is_ccw());
  /// assert!(Orientation::from_side_value(0.0_f32).is_colinear());
  /// assert!(Orientation::from_side_value(-0.0_f32).is_colinear());
  /// assert!(Orientation::from_side_value(1e-30_f32).is_cw());
  /// ```
  pub fn from_side_value<T>(value: T) -> Orientation
  where
    T: SegmentScalar,
  {
    let zero = T::zero();
    if value > zero {
      ClockWise
    } else if value < zero {
      CounterClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
