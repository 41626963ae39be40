use log::debug;
use serde::Serialize;

use crate::geometry::project_3d;
use crate::types::{CelestialSample, Projection, Vec3};

pub const R_MAX_MIN: f64 = 18.0;
pub const R_MAX_MAX: f64 = 90.0;

/// Camera elevation above the southern horizon for the 3D views.
pub const CAMERA_ELEVATION_DEG: f64 = 20.0;
/// Extra distance so the bounding sphere does not touch the frustum.
pub const CAMERA_PADDING: f64 = 1.1;

/// Radial extent of the polar plot in degrees from the zenith.
///
/// With auto zoom on and something above the horizon, the plot reaches down
/// to the lowest visible object plus `margin_deg`; otherwise the manual
/// value is used. Either way the result is clamped to [18, 90]; a NaN
/// extent shows the whole sky.
pub fn compute_zoom(
    samples: &[CelestialSample],
    manual_r_max: f64,
    auto_enabled: bool,
    margin_deg: f64,
) -> f64 {
    let alt_min = samples
        .iter()
        .filter(|s| s.visible())
        .map(|s| s.altitude_deg)
        .reduce(f64::min);

    let r_max = match alt_min {
        Some(alt_min) if auto_enabled => ((90.0 - alt_min) + margin_deg).min(90.0),
        _ => manual_r_max,
    };
    // NaN survives clamp
    let r_max = if r_max.is_nan() { R_MAX_MAX } else { r_max };
    let r_max = r_max.clamp(R_MAX_MIN, R_MAX_MAX);
    debug!("zoom: auto={auto_enabled} alt_min={alt_min:?} r_max={r_max:.1}");
    r_max
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f64,
}

/// Sphere centred on the axis-aligned bounds of `points`.
pub fn bounding_sphere(points: &[Vec3]) -> Option<BoundingSphere> {
    let first = points.first()?;
    let (mut lo, mut hi) = (*first, *first);
    for p in points {
        lo = Vec3::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z));
        hi = Vec3::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z));
    }
    let center = lo.plus(hi).scaled(0.5);
    let radius = points
        .iter()
        .map(|p| p.distance(center))
        .fold(0.0, f64::max);
    Some(BoundingSphere { center, radius })
}

/// Extreme points of the visible dome: the four horizon cardinals and the zenith.
pub fn dome_extent(projection: Projection, radius: f64) -> Vec<Vec3> {
    let mut pts: Vec<Vec3> = [0.0, 90.0, 180.0, 270.0]
        .iter()
        .map(|&az| project_3d(0.0, az, projection, radius))
        .collect();
    pts.push(project_3d(90.0, 0.0, projection, radius));
    pts
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraFrame {
    pub position: Vec3,
    pub target: Vec3,
    pub distance: f64,
    pub fov_deg: f64,
}

/// Frame the camera on `geometry` plus the dome itself, looking from the
/// south and slightly above the horizon, far enough back that the bounding
/// sphere fits the field of view.
pub fn frame_camera(
    geometry: &[Vec3],
    projection: Projection,
    dome_radius: f64,
    fov_deg: f64,
) -> CameraFrame {
    let mut all = dome_extent(projection, dome_radius);
    all.extend_from_slice(geometry);
    let sphere = bounding_sphere(&all).unwrap_or(BoundingSphere {
        center: Vec3::default(),
        radius: dome_radius,
    });

    let half_fov = (fov_deg / 2.0).to_radians();
    let distance = sphere.radius / half_fov.sin() * CAMERA_PADDING;
    let direction = project_3d(CAMERA_ELEVATION_DEG, 180.0, projection, 1.0).normalized();

    CameraFrame {
        position: sphere.center.plus(direction.scaled(distance)),
        target: sphere.center,
        distance,
        fov_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{approx, sample};

    #[test]
    fn auto_zoom_frames_lowest_object_plus_margin() {
        let high = vec![sample("Venus", 70.0, 100.0, -4.3), sample("Moon", 80.0, 10.0, -12.0)];
        assert!(approx(compute_zoom(&high, 90.0, true, 6.0), 26.0, 1e-12));

        let low = vec![sample("Mars", 10.0, 100.0, 0.5), sample("Moon", 80.0, 10.0, -12.0)];
        assert!(approx(compute_zoom(&low, 40.0, true, 6.0), 90.0, 1e-12));
    }

    #[test]
    fn auto_zoom_never_goes_below_the_floor() {
        let zenith = vec![sample("Sun", 89.5, 0.0, -26.7)];
        assert!(approx(compute_zoom(&zenith, 90.0, true, 6.0), R_MAX_MIN, 1e-12));
    }

    #[test]
    fn objects_below_horizon_do_not_affect_zoom() {
        let s = vec![sample("Saturn", -30.0, 0.0, 0.8), sample("Jupiter", 60.0, 0.0, -2.7)];
        assert!(approx(compute_zoom(&s, 90.0, true, 6.0), 36.0, 1e-12));
    }

    #[test]
    fn no_visible_objects_falls_back_to_manual() {
        assert!(approx(compute_zoom(&[], 50.0, true, 6.0), 50.0, 1e-12));
        let below = vec![sample("Sun", -10.0, 0.0, -26.7)];
        assert!(approx(compute_zoom(&below, 50.0, true, 6.0), 50.0, 1e-12));
    }

    #[test]
    fn manual_zoom_is_clamped() {
        let s = vec![sample("Venus", 70.0, 100.0, -4.3)];
        assert!(approx(compute_zoom(&s, 40.0, false, 6.0), 40.0, 1e-12));
        assert!(approx(compute_zoom(&s, 5.0, false, 6.0), 18.0, 1e-12));
        assert!(approx(compute_zoom(&s, 120.0, false, 6.0), 90.0, 1e-12));
    }

    #[test]
    fn nan_extent_shows_the_whole_sky() {
        assert!(approx(compute_zoom(&[], f64::NAN, false, 6.0), R_MAX_MAX, 1e-12));
        let s = vec![sample("Venus", 70.0, 100.0, -4.3)];
        assert!(approx(compute_zoom(&s, 40.0, true, f64::NAN), R_MAX_MAX, 1e-12));
        assert!(approx(compute_zoom(&s, f64::INFINITY, false, 6.0), R_MAX_MAX, 1e-12));
    }

    #[test]
    fn bounding_sphere_covers_all_points() {
        let pts = vec![
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        ];
        let s = bounding_sphere(&pts).unwrap();
        assert!(approx(s.center.x, 0.0, 1e-12));
        assert!(approx(s.center.y, 1.0, 1e-12));
        for p in &pts {
            assert!(p.distance(s.center) <= s.radius + 1e-12);
        }
        assert!(bounding_sphere(&[]).is_none());
    }

    #[test]
    fn camera_looks_from_the_south_and_above() {
        let frame = frame_camera(&[], Projection::Dome3d, 1000.0, 60.0);
        let rel = Vec3::new(
            frame.position.x - frame.target.x,
            frame.position.y - frame.target.y,
            frame.position.z - frame.target.z,
        );
        // Dome: south is +Z, up is +Y
        assert!(approx(rel.x, 0.0, 1e-6));
        assert!(rel.z > 0.0);
        assert!(rel.y > 0.0);
        assert!(approx(rel.length(), frame.distance, 1e-6));

        let frame = frame_camera(&[], Projection::Hemisphere3d, 1.0, 60.0);
        let rel = Vec3::new(
            frame.position.x - frame.target.x,
            frame.position.y - frame.target.y,
            frame.position.z - frame.target.z,
        );
        // Hemisphere: south is -Y, up is +Z
        assert!(rel.y < 0.0);
        assert!(rel.z > 0.0);
    }

    #[test]
    fn camera_distance_fits_the_dome_in_view() {
        let fov = 60.0;
        let frame = frame_camera(&[], Projection::Dome3d, 1000.0, fov);
        let sphere = bounding_sphere(&dome_extent(Projection::Dome3d, 1000.0)).unwrap();
        // The whole dome is inside the bounding sphere...
        assert!(sphere.radius >= 1000.0 * 0.5);
        // ...and the sphere subtends no more than the field of view
        let half_angle = (sphere.radius / frame.distance).asin().to_degrees();
        assert!(half_angle <= fov / 2.0);
    }

    #[test]
    fn far_geometry_pushes_the_camera_back() {
        let near = frame_camera(&[], Projection::Dome3d, 100.0, 60.0);
        let far = frame_camera(&[Vec3::new(0.0, 0.0, 900.0)], Projection::Dome3d, 100.0, 60.0);
        assert!(far.distance > near.distance);
    }
}
