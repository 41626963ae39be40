use serde::Serialize;

use crate::types::Projection;

/// Linear magnitude-to-size mapping, clamped at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeScale {
    pub base: f64,
    pub slope: f64,
    pub min: f64,
    pub max: f64,
}

impl SizeScale {
    /// Marker area for the polar plot.
    pub const PLOT_2D: Self = Self {
        base: 260.0,
        slope: 32.0,
        min: 26.0,
        max: 520.0,
    };

    /// Point size for the 3D views.
    pub const POINT_3D: Self = Self {
        base: 22.0,
        slope: 2.8,
        min: 6.0,
        max: 36.0,
    };

    pub fn for_projection(projection: Projection) -> Self {
        if projection.is_3d() {
            Self::POINT_3D
        } else {
            Self::PLOT_2D
        }
    }

    /// Brighter (lower) magnitudes give larger sizes.
    pub fn size_from_magnitude(&self, mag: f64) -> f64 {
        (self.base - mag * self.slope).clamp(self.min, self.max)
    }
}

impl Default for SizeScale {
    fn default() -> Self {
        Self::PLOT_2D
    }
}

/// Zero at or below the horizon, then 0.55 rising linearly to 1.0 at the zenith.
pub fn alpha_from_altitude(alt_deg: f64) -> f64 {
    if alt_deg <= 0.0 {
        return 0.0;
    }
    (0.55 + 0.45 * (alt_deg / 90.0)).clamp(0.55, 1.0)
}
