pub use super::base::*;
pub use super::error::*;
pub use super::filter::*;
pub use super::geometry::*;
pub use super::lowdiscrepancy::*;
pub use super::param_set::*;
