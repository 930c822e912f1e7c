use super::radical_inverse::*;
use crate::core::base::*;

/// Returns the `index`-th point of a `count`-point 2D Hammersley set.
///
/// The first coordinate is `index / count`; the second is the radical
/// inverse of `index` in the prime base selected by `base_index`
/// (`0` selects base 2). The set is fully deterministic.
pub fn hammersley_sequence(base_index: u32, index: usize, count: usize) -> Point2f {
    let x = index as Float / count as Float;
    let y = radical_inverse(base_index, index as u64);
    return Point2f::new(x, y);
}
