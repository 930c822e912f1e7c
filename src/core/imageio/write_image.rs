use crate::core::base::*;
use crate::core::error::*;
use crate::core::filter::*;
use image::{GrayImage, Luma};
use log::*;
use rayon::prelude::*;
use std::path::Path;

/// Samples `filter` at `resolution x resolution` pixel centers spanning its
/// support. Row 0 is `y = +yradius`.
pub fn sample_filter_image<F: Filter + ?Sized>(filter: &F, resolution: usize) -> Vec<Float> {
    let resolution = usize::max(1, resolution);
    let radius = filter.get_radius();
    let mut values = vec![0.0; resolution * resolution];
    values
        .par_chunks_mut(resolution)
        .enumerate()
        .for_each(|(j, row)| {
            let ty = (j as Float + 0.5) / resolution as Float;
            let y = lerp(ty, radius.y, -radius.y);
            for (i, v) in row.iter_mut().enumerate() {
                let tx = (i as Float + 0.5) / resolution as Float;
                let x = lerp(tx, -radius.x, radius.x);
                *v = filter.evaluate(x, y);
            }
        });
    return values;
}

/// Remaps `values` from their `[min, max]` range onto 8-bit gray.
pub fn to_gray_image(values: &[Float], resolution: usize) -> GrayImage {
    let (lo, hi) = values
        .iter()
        .fold((Float::INFINITY, Float::NEG_INFINITY), |(lo, hi), v| {
            (Float::min(lo, *v), Float::max(hi, *v))
        });
    let range = hi - lo;
    let scale = if range > 0.0 { 1.0 / range } else { 0.0 };
    GrayImage::from_fn(resolution as u32, resolution as u32, |x, y| {
        let v = values[y as usize * resolution + x as usize];
        let t = if scale > 0.0 { (v - lo) * scale } else { 1.0 };
        Luma([clamp(t * 255.0 + 0.5, 0.0, 255.0) as u8])
    })
}

pub fn write_filter_image<F: Filter + ?Sized>(
    filter: &F,
    resolution: usize,
    path: &Path,
) -> Result<(), FilterError> {
    let resolution = usize::max(1, resolution);
    let values = sample_filter_image(filter, resolution);
    let img = to_gray_image(&values, resolution);
    img.save(path)?;
    info!(
        "Wrote {}x{} filter image to {:?}.",
        resolution, resolution, path
    );
    return Ok(());
}
