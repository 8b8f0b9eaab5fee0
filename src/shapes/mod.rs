//! Geometric classes built on the runtime.
pub mod circle;
pub mod point;
pub use circle::init_circle;
pub use point::{draw, init_point, move_by, super_draw, DRAW};
