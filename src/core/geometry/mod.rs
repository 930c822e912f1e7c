pub mod numeric_traits;
pub mod vector2;

pub use vector2::*;
