use crate::core::prelude::*;

use std::sync::Arc;

/// Separable linear falloff, 1 at the center and 0 on the edges.
#[derive(Debug, Clone)]
pub struct TriangleFilter {
    base: BaseFilter,
}

impl TriangleFilter {
    pub fn new(xradius: Float, yradius: Float) -> Self {
        TriangleFilter {
            base: BaseFilter::new(xradius, yradius),
        }
    }
}

impl Filter for TriangleFilter {
    fn get_xradius(&self) -> Float {
        self.base.radius.x
    }
    fn get_yradius(&self) -> Float {
        self.base.radius.y
    }
    fn evaluate(&self, x: Float, y: Float) -> Float {
        let (nx, ny) = self.base.normalize(x, y);
        return (1.0 - Float::abs(nx)) * (1.0 - Float::abs(ny));
    }
}

pub fn create_triangle_filter(params: &ParamSet) -> Result<Arc<dyn Filter>, FilterError> {
    let xw = params.find_one_float("xwidth", 2.0);
    let yw = params.find_one_float("ywidth", 2.0);
    check_radius(xw, yw)?;
    log::debug!("Created triangle filter with radius ({}, {}).", xw, yw);
    return Ok(Arc::new(TriangleFilter::new(xw, yw)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let f = TriangleFilter::new(2.0, 4.0);
        assert_eq!(f.evaluate(0.0, 0.0), 1.0);
        assert_eq!(f.evaluate(1.0, 0.0), 0.5);
        assert_eq!(f.evaluate(1.0, 2.0), 0.25);
        assert_eq!(f.evaluate(2.0, 1.0), 0.0);
        assert_eq!(f.evaluate(-1.5, 4.0), 0.0);
    }
}
