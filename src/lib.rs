pub mod core;
pub mod filters;
