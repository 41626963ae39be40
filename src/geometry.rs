use serde::Serialize;

use crate::types::{Coords, Point, Polar, Projection, Vec3};

/// Azimuth in degrees, folded into [0, 360) so that 0 and 360 share a point.
#[inline]
fn wrap_azimuth(az_deg: f64) -> f64 {
    az_deg.rem_euclid(360.0)
}

// Polar plot convention: theta is the azimuth in radians (the renderer runs
// it clockwise with zero at North), r is the zenith distance in degrees.
pub fn polar(altitude_deg: f64, azimuth_deg: f64) -> Polar {
    Polar {
        theta: wrap_azimuth(azimuth_deg).to_radians(),
        r: 90.0 - altitude_deg,
    }
}

// Unit hemisphere: +X East, +Y North, +Z Up.
pub fn hemisphere(altitude_deg: f64, azimuth_deg: f64) -> Vec3 {
    let alt = altitude_deg.to_radians();
    let az = wrap_azimuth(azimuth_deg).to_radians();
    Vec3 {
        x: alt.cos() * az.sin(),
        y: alt.cos() * az.cos(),
        z: alt.sin(),
    }
}

// Sky dome: +X East, +Y Up, North along -Z.
pub fn dome(altitude_deg: f64, azimuth_deg: f64, radius: f64) -> Vec3 {
    let alt = altitude_deg.to_radians();
    let az = wrap_azimuth(azimuth_deg).to_radians();
    Vec3 {
        x: radius * alt.cos() * az.sin(),
        y: radius * alt.sin(),
        z: -radius * alt.cos() * az.cos(),
    }
}

/// Project an (altitude, azimuth) pair under the given convention.
/// `radius` scales the hemisphere and dome conventions and is ignored by the polar one.
pub fn project(altitude_deg: f64, azimuth_deg: f64, projection: Projection, radius: f64) -> Coords {
    match projection {
        Projection::Polar2d => Coords::Polar(polar(altitude_deg, azimuth_deg)),
        Projection::Hemisphere3d => {
            Coords::Cartesian(hemisphere(altitude_deg, azimuth_deg).scaled(radius))
        }
        Projection::Dome3d => Coords::Cartesian(dome(altitude_deg, azimuth_deg, radius)),
    }
}

/// Cartesian position for a 3D convention; the polar convention falls back to the dome.
pub fn project_3d(altitude_deg: f64, azimuth_deg: f64, projection: Projection, radius: f64) -> Vec3 {
    match project(altitude_deg, azimuth_deg, projection, radius) {
        Coords::Cartesian(v) => v,
        Coords::Polar(_) => dome(altitude_deg, azimuth_deg, radius),
    }
}

// North is up, azimuth runs clockwise on screen.
#[inline]
pub fn to_pixels(p: Polar, center_px: Point, scale: f64) -> Point {
    Point {
        x: center_px.x + p.r * scale * p.theta.sin(),
        y: center_px.y - p.r * scale * p.theta.cos(),
    }
}

/// Axis-aligned screen rectangle, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn inflate(&self, pad: f64) -> Self {
        Self {
            x: self.x - pad,
            y: self.y - pad,
            w: self.w + 2.0 * pad,
            h: self.h + 2.0 * pad,
        }
    }

    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w <= 0.0 || h <= 0.0 { 0.0 } else { w * h }
    }
}
