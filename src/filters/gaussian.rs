use crate::core::prelude::*;

use std::sync::Arc;

/// Separable Gaussian, shifted down so it reaches zero on the support edge.
#[derive(Debug, Clone)]
pub struct GaussianFilter {
    base: BaseFilter,
    alpha: Float,
    shift: Float,
}

impl GaussianFilter {
    pub fn new(xradius: Float, yradius: Float, alpha: Float) -> Self {
        GaussianFilter {
            base: BaseFilter::new(xradius, yradius),
            alpha,
            shift: Self::gaussian(1.0, alpha),
        }
    }

    pub fn get_alpha(&self) -> Float {
        self.alpha
    }

    /// Value subtracted from each axis so the normalized edge maps to 0.
    pub fn get_shift(&self) -> Float {
        self.shift
    }

    #[inline]
    fn gaussian(x: Float, alpha: Float) -> Float {
        return Float::exp(-alpha * x * x);
    }
}

impl Filter for GaussianFilter {
    fn get_xradius(&self) -> Float {
        self.base.radius.x
    }
    fn get_yradius(&self) -> Float {
        self.base.radius.y
    }
    fn evaluate(&self, x: Float, y: Float) -> Float {
        let (nx, ny) = self.base.normalize(x, y);
        let fx = Self::gaussian(nx, self.alpha) - self.shift;
        let fy = Self::gaussian(ny, self.alpha) - self.shift;
        return fx * fy;
    }
}

pub fn create_gaussian_filter(params: &ParamSet) -> Result<Arc<dyn Filter>, FilterError> {
    let xw = params.find_one_float("xwidth", 2.0);
    let yw = params.find_one_float("ywidth", 2.0);
    let alpha = params.find_one_float("alpha", 2.0);
    check_radius(xw, yw)?;
    if alpha <= 0.0 {
        log::warn!("Gaussian filter \"alpha\" {} is not positive.", alpha);
    }
    log::debug!(
        "Created gaussian filter with radius ({}, {}), alpha {}.",
        xw,
        yw,
        alpha
    );
    return Ok(Arc::new(GaussianFilter::new(xw, yw, alpha)));
}
