pub mod color;
pub mod point;
pub mod rect;
pub(crate) mod spiral;
