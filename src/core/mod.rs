pub mod base;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod imageio;
pub mod lowdiscrepancy;
pub mod param_set;
pub mod prelude;
