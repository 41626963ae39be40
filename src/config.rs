use crate::encoding::SizeScale;
use crate::error::SkyError;
use crate::types::{LabelMode, Projection};

/// Candidate label offsets in screen pixels (y down), nearest first.
pub const DEFAULT_OFFSETS: [(f64, f64); 12] = [
    (12.0, 8.0),
    (12.0, -8.0),
    (-12.0, 8.0),
    (-12.0, -8.0),
    (0.0, 12.0),
    (0.0, -12.0),
    (18.0, 0.0),
    (-18.0, 0.0),
    (18.0, 10.0),
    (18.0, -10.0),
    (-18.0, 10.0),
    (-18.0, -10.0),
];

#[derive(Debug, Clone, Copy)]
pub struct Margin {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}
impl Margin {
    pub fn uniform(px: u32) -> Self {
        Self {
            top: px,
            bottom: px,
            left: px,
            right: px,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LabelConfig {
    pub mode: LabelMode,
    pub max_labels: usize,
    pub cluster_px: f64,
    pub min_separation_px: f64,
    pub offsets: Vec<(f64, f64)>,
    pub char_width_px: f64,
    pub line_height_px: f64,
}
impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            mode: LabelMode::Smart,
            max_labels: 6,
            cluster_px: 22.0,
            min_separation_px: 10.0,
            offsets: DEFAULT_OFFSETS.to_vec(),
            char_width_px: 7.0,
            line_height_px: 12.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ZoomConfig {
    pub auto: bool,
    pub manual_r_max: f64,
    pub margin_deg: f64,
}
impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            auto: true,
            manual_r_max: 90.0,
            margin_deg: 6.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StarField {
    pub enabled: bool,
    pub count: usize,
    pub seed: u64,
}
impl Default for StarField {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 150,
            seed: 7,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkyMapConfig {
    pub title: Option<String>,
    pub projection: Projection,
    pub radius: f64,
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub show_horizon: bool,
    pub show_grid: bool,
    pub star_field: StarField,
    pub labels: LabelConfig,
    pub zoom: ZoomConfig,
    pub size_scale: SizeScale,
    pub camera_fov_deg: f64,
}
fn check(
    name: &'static str,
    value: f64,
    expected: &'static str,
    ok: impl Fn(f64) -> bool,
) -> Result<(), SkyError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(SkyError::InvalidSetting {
            name,
            value,
            expected,
        })
    }
}

impl SkyMapConfig {
    /// Reject settings that would turn render coordinates into NaN or infinity.
    pub fn validate(&self) -> Result<(), SkyError> {
        check("radius", self.radius, "> 0", |v| v > 0.0)?;
        check("camera_fov_deg", self.camera_fov_deg, "in (0, 180)", |v| {
            v > 0.0 && v < 180.0
        })?;
        check("manual_r_max", self.zoom.manual_r_max, "a finite number", |_| true)?;
        check("margin_deg", self.zoom.margin_deg, ">= 0", |v| v >= 0.0)?;
        check("cluster_px", self.labels.cluster_px, ">= 0", |v| v >= 0.0)?;
        check("min_separation_px", self.labels.min_separation_px, ">= 0", |v| {
            v >= 0.0
        })?;
        for &(dx, dy) in &self.labels.offsets {
            check("offset dx", dx, "a finite number", |_| true)?;
            check("offset dy", dy, "a finite number", |_| true)?;
        }
        Ok(())
    }

    /// Defaults for a projection, with its radius and size scale.
    pub fn for_projection(projection: Projection) -> Self {
        Self {
            projection,
            radius: projection.default_radius(),
            size_scale: SizeScale::for_projection(projection),
            ..Self::default()
        }
    }
}
impl Default for SkyMapConfig {
    fn default() -> Self {
        Self {
            title: None,
            projection: Projection::Polar2d,
            radius: Projection::Polar2d.default_radius(),
            width: 800,
            height: 800,
            margin: Margin::uniform(40),
            show_horizon: true,
            show_grid: true,
            star_field: StarField::default(),
            labels: LabelConfig::default(),
            zoom: ZoomConfig::default(),
            size_scale: SizeScale::PLOT_2D,
            camera_fov_deg: 60.0,
        }
    }
}
