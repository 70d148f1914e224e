pub mod extents;
pub mod mapper;

pub use extents::Extents;
pub use mapper::{SELECTION_EPSILON, current_view_extents, selection_bounds, selection_or_view_extents};
