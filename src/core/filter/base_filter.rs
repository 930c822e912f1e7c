use crate::core::base::*;
use crate::core::error::*;

/// Radii shared by every kernel, with reciprocals cached so `evaluate`
/// normalizes by multiplication.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BaseFilter {
    pub radius: Vector2f,
    pub inv_radius: Vector2f,
}

fn inverse_vector(radius: &Vector2f) -> Vector2f {
    Vector2f::new(1.0 / radius.x, 1.0 / radius.y)
}

impl BaseFilter {
    pub fn new(xradius: Float, yradius: Float) -> Self {
        let radius = Vector2f::new(xradius, yradius);
        BaseFilter {
            radius,
            inv_radius: inverse_vector(&radius),
        }
    }
    pub fn get_radius(&self) -> Vector2f {
        self.radius
    }
    pub fn get_inv_radius(&self) -> Vector2f {
        self.inv_radius
    }
    /// Maps `(x, y)` from the support onto `[-1, 1]^2`.
    #[inline]
    pub fn normalize(&self, x: Float, y: Float) -> (Float, Float) {
        (x * self.inv_radius.x, y * self.inv_radius.y)
    }
}

/// Rejects widths that would make the cached reciprocals infinite or NaN.
pub fn check_radius(xw: Float, yw: Float) -> Result<(), FilterError> {
    if !(xw > 0.0 && yw > 0.0) || !xw.is_finite() || !yw.is_finite() {
        let msg = format!("Filter radius ({}, {}) must be positive and finite.", xw, yw);
        return Err(FilterError::error(&msg));
    }
    return Ok(());
}
