use super::box_filter::*;
use super::gaussian::*;
use super::lanczos::*;
use super::mitchell::*;
use super::triangle::*;
use crate::core::error::FilterError;
use crate::core::filter::*;
use crate::core::param_set::*;

use std::sync::Arc;

pub const FILTER_NAMES: [&str; 5] = ["box", "triangle", "gaussian", "mitchell", "lanczos"];

pub fn create_filter(name: &str, params: &ParamSet) -> Result<Arc<dyn Filter>, FilterError> {
    let filter = match name {
        "box" => create_box_filter(params),
        "triangle" => create_triangle_filter(params),
        "gaussian" => create_gaussian_filter(params),
        "mitchell" => create_mitchell_filter(params),
        "lanczos" | "sinc" => create_lanczos_filter(params),
        _ => {
            let msg = format!("Filter \"{}\" unknown.", name);
            return Err(FilterError::warning(&msg));
        }
    }?;
    params.report_unused();
    return Ok(filter);
}
