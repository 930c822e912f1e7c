use crate::core::base::*;

/// A separable 2D reconstruction kernel with rectangular support
/// `[-xradius, xradius] x [-yradius, yradius]`.
///
/// Kernels are not normalized. `evaluate` is unspecified outside the
/// support; callers only query offsets inside it.
pub trait Filter: Send + Sync {
    fn get_xradius(&self) -> Float;
    fn get_yradius(&self) -> Float;
    fn evaluate(&self, x: Float, y: Float) -> Float;

    fn get_radius(&self) -> Vector2f {
        Vector2f::new(self.get_xradius(), self.get_yradius())
    }
}
