use super::filter::*;
use crate::core::base::*;
use rayon::prelude::*;

pub const FILTER_TABLE_WIDTH: usize = 16;

/// Kernel weights tabulated over the positive quadrant of the support.
///
/// Entry `(x, y)` holds `evaluate` at the cell center
/// `((x + 0.5) / width * xradius, (y + 0.5) / width * yradius)`. All kernels
/// are symmetric about both axes, so one quadrant covers the whole support.
#[derive(Debug, Clone)]
pub struct FilterTable {
    width: usize,
    radius: Vector2f,
    values: Vec<Float>,
}

impl FilterTable {
    pub fn new<F: Filter + ?Sized>(filter: &F, width: usize) -> Self {
        let width = usize::max(1, width);
        let radius = filter.get_radius();
        let mut values = vec![0.0; width * width];
        values
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                let yy = (y as Float + 0.5) * (radius.y / width as Float);
                for (x, v) in row.iter_mut().enumerate() {
                    let xx = (x as Float + 0.5) * (radius.x / width as Float);
                    *v = filter.evaluate(xx, yy);
                }
            });
        log::debug!(
            "Created {}x{} filter table for radius {:?}.",
            width,
            width,
            radius
        );
        FilterTable {
            width,
            radius,
            values,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn radius(&self) -> Vector2f {
        self.radius
    }

    pub fn values(&self) -> &[Float] {
        &self.values
    }

    pub fn get(&self, x: usize, y: usize) -> Float {
        self.values[y * self.width + x]
    }

    /// Nearest-cell weight for an offset inside the support.
    pub fn lookup(&self, dx: Float, dy: Float) -> Float {
        let w = self.width as Float;
        let fx = Float::abs(dx) / self.radius.x * w;
        let fy = Float::abs(dy) / self.radius.y * w;
        let ix = usize::min(fx as usize, self.width - 1);
        let iy = usize::min(fy as usize, self.width - 1);
        return self.get(ix, iy);
    }

    pub fn sum(&self) -> Float {
        self.values.iter().sum()
    }
}
