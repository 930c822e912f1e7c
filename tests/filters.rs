use recon_filters::core::prelude::*;
use recon_filters::filters::*;

fn near_equal(a: Float, b: Float, e: Float) -> bool {
    (a - b).abs() < e
}

const RADII: [(Float, Float); 4] = [(0.5, 0.5), (1.0, 2.0), (2.0, 2.0), (3.0, 1.5)];

fn grid(xradius: Float, yradius: Float) -> Vec<(Float, Float)> {
    let mut points = Vec::new();
    for j in 0..=8 {
        for i in 0..=8 {
            let x = xradius * (i as Float / 4.0 - 1.0);
            let y = yradius * (j as Float / 4.0 - 1.0);
            points.push((x, y));
        }
    }
    points
}

#[test]
fn filters_radius_accessors() {
    for (xr, yr) in RADII {
        let filters: Vec<Box<dyn Filter>> = vec![
            Box::new(BoxFilter::new(xr, yr)),
            Box::new(TriangleFilter::new(xr, yr)),
            Box::new(GaussianFilter::new(xr, yr, 2.0)),
            Box::new(MitchellFilter::new(xr, yr, 1.0 / 3.0, 1.0 / 3.0)),
            Box::new(LanczosFilter::new(xr, yr, 3.0)),
        ];
        for f in filters.iter() {
            assert_eq!(f.get_xradius(), xr);
            assert_eq!(f.get_yradius(), yr);
            assert_eq!(f.get_radius(), Vector2f::new(xr, yr));
        }
    }
}

#[test]
fn box_filter_is_one_everywhere() {
    for (xr, yr) in RADII {
        let f = BoxFilter::new(xr, yr);
        for (x, y) in grid(xr, yr) {
            assert_eq!(f.evaluate(x, y), 1.0);
        }
    }
}

#[test]
fn triangle_filter_center_and_edges() {
    for (xr, yr) in RADII {
        let f = TriangleFilter::new(xr, yr);
        assert_eq!(f.evaluate(0.0, 0.0), 1.0);
        for (x, y) in grid(xr, yr) {
            assert!(near_equal(f.evaluate(xr, y), 0.0, 1e-6));
            assert!(near_equal(f.evaluate(-xr, y), 0.0, 1e-6));
            assert!(near_equal(f.evaluate(x, yr), 0.0, 1e-6));
            assert!(near_equal(f.evaluate(x, -yr), 0.0, 1e-6));
        }
    }
}

#[test]
fn triangle_filter_symmetry() {
    for (xr, yr) in RADII {
        let f = TriangleFilter::new(xr, yr);
        for (x, y) in grid(xr, yr) {
            let v = f.evaluate(x, y);
            assert_eq!(v, f.evaluate(-x, y));
            assert_eq!(v, f.evaluate(x, -y));
        }
    }
}

#[test]
fn gaussian_filter_vanishes_on_edges() {
    // power-of-two radii keep x * (1 / radius) exact at the edge
    for (xr, yr) in [(0.5, 0.5), (1.0, 2.0), (2.0, 4.0)] {
        for alpha in [0.5, 1.0, 2.0, 4.0, 16.0] {
            let f = GaussianFilter::new(xr, yr, alpha);
            for (x, y) in grid(xr, yr) {
                assert_eq!(f.evaluate(xr, y), 0.0);
                assert_eq!(f.evaluate(x, -yr), 0.0);
            }
        }
    }
}

#[test]
fn gaussian_filter_center() {
    for alpha in [0.5, 1.0, 2.0, 4.0] {
        let f = GaussianFilter::new(2.0, 2.0, alpha);
        let shift = libm::exp(-(alpha as f64)) as Float;
        assert!(near_equal(f.get_shift(), shift, 1e-6));
        let center = f.evaluate(0.0, 0.0);
        assert_eq!(center, (1.0 - f.get_shift()) * (1.0 - f.get_shift()));
        assert!(center > 0.0);
    }
}

#[test]
fn gaussian_filter_sharpness() {
    let wide = GaussianFilter::new(2.0, 2.0, 1.0);
    let narrow = GaussianFilter::new(2.0, 2.0, 8.0);
    let rel = |f: &GaussianFilter, x: Float| f.evaluate(x, 0.0) / f.evaluate(0.0, 0.0);
    assert!(rel(&narrow, 1.0) < rel(&wide, 1.0));
}

#[test]
fn mitchell_filter_center() {
    let f = MitchellFilter::new(2.0, 2.0, 1.0 / 3.0, 1.0 / 3.0);
    assert!(near_equal(f.evaluate(0.0, 0.0), 64.0 / 81.0, 1e-6));
    let f = MitchellFilter::new(0.5, 3.0, 1.0 / 3.0, 1.0 / 3.0);
    assert!(near_equal(f.evaluate(0.0, 0.0), 64.0 / 81.0, 1e-6));
}

#[test]
fn mitchell_filter_continuity() {
    let f = MitchellFilter::new(2.0, 2.0, 1.0 / 3.0, 1.0 / 3.0);
    assert!(near_equal(f.inner(1.0), f.outer(1.0), 1e-6));
    // the breakpoint u = 1 sits at half the radius
    let eps = 1e-4;
    let left = f.evaluate(1.0 - eps, 0.0);
    let right = f.evaluate(1.0 + eps, 0.0);
    assert!(near_equal(left, right, 1e-3));
}

#[test]
fn mitchell_filter_negative_lobes() {
    let f = MitchellFilter::new(2.0, 2.0, 1.0 / 3.0, 1.0 / 3.0);
    // u = 1.5 lies in the outer, negative piece
    assert!(f.evaluate(1.5, 0.0) < 0.0);
    assert!(f.evaluate(1.5, 1.5) > 0.0);
}

#[test]
fn lanczos_filter_center_and_symmetry() {
    for tau in [1.0, 2.0, 3.0] {
        for (xr, yr) in RADII {
            let f = LanczosFilter::new(xr, yr, tau);
            assert_eq!(f.evaluate(0.0, 0.0), 1.0);
            for (x, y) in grid(xr, yr) {
                let v = f.evaluate(x, y);
                assert_eq!(v, f.evaluate(-x, y));
                assert_eq!(v, f.evaluate(x, -y));
            }
        }
    }
}

#[test]
fn filters_evaluate_concurrently() {
    use std::sync::Arc;
    use std::thread;

    let f: Arc<dyn Filter> = Arc::new(MitchellFilter::new(2.0, 2.0, 1.0 / 3.0, 1.0 / 3.0));
    let expected: Vec<Float> = grid(2.0, 2.0)
        .iter()
        .map(|(x, y)| f.evaluate(*x, *y))
        .collect();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let f = Arc::clone(&f);
            thread::spawn(move || {
                grid(2.0, 2.0)
                    .iter()
                    .map(|(x, y)| f.evaluate(*x, *y))
                    .collect::<Vec<Float>>()
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
