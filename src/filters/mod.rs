pub mod box_filter;
pub mod create_filter;
pub mod gaussian;
pub mod lanczos;
pub mod mitchell;
pub mod triangle;

pub use box_filter::*;
pub use create_filter::{create_filter, FILTER_NAMES};
pub use gaussian::*;
pub use lanczos::*;
pub use mitchell::*;
pub use triangle::*;
