use crate::core::prelude::*;

use std::sync::Arc;

/// Uniform weight over the whole support.
#[derive(Debug, Clone)]
pub struct BoxFilter {
    base: BaseFilter,
}

impl BoxFilter {
    pub fn new(xradius: Float, yradius: Float) -> Self {
        BoxFilter {
            base: BaseFilter::new(xradius, yradius),
        }
    }
}

impl Filter for BoxFilter {
    fn get_xradius(&self) -> Float {
        self.base.radius.x
    }
    fn get_yradius(&self) -> Float {
        self.base.radius.y
    }
    fn evaluate(&self, _x: Float, _y: Float) -> Float {
        return 1.0;
    }
}

pub fn create_box_filter(params: &ParamSet) -> Result<Arc<dyn Filter>, FilterError> {
    let xw = params.find_one_float("xwidth", 0.5);
    let yw = params.find_one_float("ywidth", 0.5);
    check_radius(xw, yw)?;
    log::debug!("Created box filter with radius ({}, {}).", xw, yw);
    return Ok(Arc::new(BoxFilter::new(xw, yw)));
}
