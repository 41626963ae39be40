use crate::config::SkyMapConfig;
use crate::context::SkyContext;
use crate::types::{CelestialSample, Coords, Point, Polar, ProjectedPoint, Vec3};

// Check that the error between a and b is close enough
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub fn sample(name: &str, altitude_deg: f64, azimuth_deg: f64, magnitude: f64) -> CelestialSample {
    CelestialSample::new(name, altitude_deg, azimuth_deg, magnitude)
}

pub fn make_context<'a>(
    samples: &'a [CelestialSample],
    patch: impl FnOnce(&mut SkyMapConfig),
) -> SkyContext<'a> {
    let mut cfg = SkyMapConfig::default();
    patch(&mut cfg);
    SkyContext::new(samples, cfg).expect("valid test samples")
}

fn point(name: &str, altitude_deg: f64, azimuth_deg: f64, magnitude: f64, coords: Coords) -> ProjectedPoint {
    ProjectedPoint {
        sample: sample(name, altitude_deg, azimuth_deg, magnitude),
        coords,
        size: 1.0,
        alpha: 1.0,
        color: "#FFFFFF".to_string(),
    }
}

/// A point already in polar plot coordinates.
pub fn polar_point(name: &str, theta: f64, r: f64, magnitude: f64) -> ProjectedPoint {
    point(
        name,
        90.0 - r,
        theta.to_degrees(),
        magnitude,
        Coords::Polar(Polar { theta, r }),
    )
}

/// A point whose x/y are its screen position under [`mock_screen`].
pub fn screen_point(name: &str, x: f64, y: f64, magnitude: f64) -> ProjectedPoint {
    point(name, 45.0, 0.0, magnitude, Coords::Cartesian(Vec3::new(x, y, 0.0)))
}

// Polar points scale theta/r by 100; cartesian points use x/y as pixels.
pub fn mock_screen(p: &ProjectedPoint) -> Point {
    match p.coords {
        Coords::Polar(pp) => Point {
            x: pp.theta * 100.0,
            y: pp.r * 100.0,
        },
        Coords::Cartesian(v) => Point { x: v.x, y: v.y },
    }
}
