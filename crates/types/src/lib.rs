pub mod geometry;
pub mod ids;

pub use geometry::{Bounds, Ellipse, Line, Orientation, PageSize, Rect};
pub use ids::{ItemId, LayoutIdentifier};
