pub mod dimensions;
pub mod render;
pub mod summary;
