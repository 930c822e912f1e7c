pub mod base_filter;
pub mod filter;
pub mod filter_table;
pub mod normalization;

pub use base_filter::*;
pub use filter::*;
pub use filter_table::*;
pub use normalization::*;
