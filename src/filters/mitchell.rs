use crate::core::prelude::*;

use std::sync::Arc;

/// Mitchell-Netravali piecewise cubic. `b = c = 1/3` is the recommended
/// member of the family.
///
/// Reference: Mitchell and Netravali, "Reconstruction Filters in
/// Computer Graphics", SIGGRAPH 1988.
#[derive(Debug, Clone)]
pub struct MitchellFilter {
    base: BaseFilter,
    b: Float,
    c: Float,
    // |u| < 1 (the linear term vanishes)
    a3: Float,
    a2: Float,
    a0: Float,
    // 1 <= |u| <= 2
    b3: Float,
    b2: Float,
    b1: Float,
    b0: Float,
}

impl MitchellFilter {
    pub fn new(xradius: Float, yradius: Float, b: Float, c: Float) -> Self {
        let k = 1.0 / 6.0;
        MitchellFilter {
            base: BaseFilter::new(xradius, yradius),
            b,
            c,
            a3: k * (12.0 - 9.0 * b - 6.0 * c),
            a2: k * (-18.0 + 12.0 * b + 6.0 * c),
            a0: k * (6.0 - 2.0 * b),
            b3: k * (-b - 6.0 * c),
            b2: k * (6.0 * b + 30.0 * c),
            b1: k * (-12.0 * b - 48.0 * c),
            b0: k * (8.0 * b + 24.0 * c),
        }
    }

    pub fn get_b(&self) -> Float {
        self.b
    }

    pub fn get_c(&self) -> Float {
        self.c
    }

    /// Inner cubic, meaningful for `u` in `[0, 1)`.
    #[inline]
    pub fn inner(&self, u: Float) -> Float {
        let u2 = u * u;
        let u3 = u2 * u;
        return self.a3 * u3 + self.a2 * u2 + self.a0;
    }

    /// Outer cubic, meaningful for `u` in `[1, 2]`.
    #[inline]
    pub fn outer(&self, u: Float) -> Float {
        let u2 = u * u;
        let u3 = u2 * u;
        return self.b3 * u3 + self.b2 * u2 + self.b1 * u + self.b0;
    }

    #[inline]
    fn mitchell_1d(&self, n: Float) -> Float {
        let u = Float::abs(n + n);
        if u < 1.0 {
            self.inner(u)
        } else {
            self.outer(u)
        }
    }
}

impl Filter for MitchellFilter {
    fn get_xradius(&self) -> Float {
        self.base.radius.x
    }
    fn get_yradius(&self) -> Float {
        self.base.radius.y
    }
    fn evaluate(&self, x: Float, y: Float) -> Float {
        let (nx, ny) = self.base.normalize(x, y);
        return self.mitchell_1d(nx) * self.mitchell_1d(ny);
    }
}

pub fn create_mitchell_filter(params: &ParamSet) -> Result<Arc<dyn Filter>, FilterError> {
    let xw = params.find_one_float("xwidth", 2.0);
    let yw = params.find_one_float("ywidth", 2.0);
    let b = params.find_one_float("B", 1.0 / 3.0);
    let c = params.find_one_float("C", 1.0 / 3.0);
    check_radius(xw, yw)?;
    log::debug!(
        "Created mitchell filter with radius ({}, {}), B {}, C {}.",
        xw,
        yw,
        b,
        c
    );
    return Ok(Arc::new(MitchellFilter::new(xw, yw, b, c)));
}
