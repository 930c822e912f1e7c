use crate::core::prelude::*;

use std::sync::Arc;

/// Separable sinc windowed by a wider sinc of width `tau`.
#[derive(Debug, Clone)]
pub struct LanczosFilter {
    base: BaseFilter,
    tau: Float,
    rcp_tau: Float,
}

impl LanczosFilter {
    pub fn new(xradius: Float, yradius: Float, tau: Float) -> Self {
        LanczosFilter {
            base: BaseFilter::new(xradius, yradius),
            tau,
            rcp_tau: 1.0 / tau,
        }
    }

    pub fn get_tau(&self) -> Float {
        self.tau
    }

    #[inline]
    fn sinc(x: Float) -> Float {
        if x == 0.0 {
            return 1.0;
        }
        return Float::sin(x) / x;
    }

    #[inline]
    fn lanczos(n: Float, rcp_tau: Float) -> Float {
        let theta = PI * Float::abs(n);
        if theta == 0.0 {
            return 1.0;
        }
        return Self::sinc(theta * rcp_tau) * Self::sinc(theta);
    }
}

impl Filter for LanczosFilter {
    fn get_xradius(&self) -> Float {
        self.base.radius.x
    }
    fn get_yradius(&self) -> Float {
        self.base.radius.y
    }
    fn evaluate(&self, x: Float, y: Float) -> Float {
        let (nx, ny) = self.base.normalize(x, y);
        return Self::lanczos(nx, self.rcp_tau) * Self::lanczos(ny, self.rcp_tau);
    }
}

pub fn create_lanczos_filter(params: &ParamSet) -> Result<Arc<dyn Filter>, FilterError> {
    let xw = params.find_one_float("xwidth", 4.0);
    let yw = params.find_one_float("ywidth", 4.0);
    let tau = params.find_one_float("tau", 3.0);
    check_radius(xw, yw)?;
    if tau <= 0.0 {
        let msg = format!("Lanczos filter \"tau\" {} must be positive.", tau);
        return Err(FilterError::error(&msg));
    }
    log::debug!(
        "Created lanczos filter with radius ({}, {}), tau {}.",
        xw,
        yw,
        tau
    );
    return Ok(Arc::new(LanczosFilter::new(xw, yw, tau)));
}
