use super::filter::*;
use crate::core::base::*;
use crate::core::lowdiscrepancy::*;

pub const DEFAULT_NORMALIZATION_SAMPLES: usize = 1024;

/// Estimates the integral of `filter` over its support with a base-2
/// Hammersley point set of `sample_count` points.
///
/// The estimate is `area * mean(f)` and is bit-for-bit reproducible for a
/// given `sample_count`. Zero samples yield zero.
pub fn compute_normalization_factor<F: Filter + ?Sized>(filter: &F, sample_count: usize) -> Float {
    if sample_count == 0 {
        return 0.0;
    }
    let xradius = filter.get_xradius();
    let yradius = filter.get_yradius();

    let mut result: Float = 0.0;
    for i in 0..sample_count {
        let s = hammersley_sequence(0, i, sample_count);
        let p = Point2f::new(xradius * (2.0 * s.x - 1.0), yradius * (2.0 * s.y - 1.0));
        result += filter.evaluate(p.x, p.y);
    }

    result *= 4.0 * xradius * yradius;
    result /= sample_count as Float;
    return result;
}
