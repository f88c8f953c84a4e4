pub mod combinations;
pub mod intersection;
pub mod triangles;

#[doc(inline)]
pub use combinations::{array_combinations, combinations};

#[doc(inline)]
pub use intersection::naive::{find_all_crossings, segment_crossings};

#[doc(inline)]
pub use triangles::{count_segment_triangles, count_triangles, find_triangles, is_triangle};
