mod crossing;
mod line_segment;
pub(crate) mod point;
mod triangle;

pub use crossing::*;
pub use line_segment::*;
pub use point::Point;
pub use triangle::*;
