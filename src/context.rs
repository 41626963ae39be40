use log::{debug, info};

use crate::config::SkyMapConfig;
use crate::data::catalog::color_for;
use crate::encoding::alpha_from_altitude;
use crate::error::SkyError;
use crate::geometry::project;
use crate::layout::ChartLayout;
use crate::types::{CelestialSample, ProjectedPoint};
use crate::zoom::compute_zoom;

/// Inputs of one render: validated samples, settings, and the derived zoom and layout.
pub struct SkyContext<'a> {
    pub samples: &'a [CelestialSample],
    pub cfg: SkyMapConfig,
    pub r_max: f64,
    pub layout: ChartLayout,
}

impl<'a> SkyContext<'a> {
    /// Fails on unusable settings or on the first sample with a non-finite
    /// altitude or azimuth, before anything is projected or labelled.
    pub fn new(samples: &'a [CelestialSample], cfg: SkyMapConfig) -> Result<Self, SkyError> {
        cfg.validate()?;
        if let Some(bad) = samples
            .iter()
            .find(|s| !s.altitude_deg.is_finite() || !s.azimuth_deg.is_finite())
        {
            return Err(SkyError::InvalidCoordinate {
                name: bad.name.clone(),
                altitude_deg: bad.altitude_deg,
                azimuth_deg: bad.azimuth_deg,
            });
        }

        let r_max = compute_zoom(
            samples,
            cfg.zoom.manual_r_max,
            cfg.zoom.auto,
            cfg.zoom.margin_deg,
        );
        let layout = ChartLayout::new(&cfg, r_max);
        Ok(Self {
            samples,
            cfg,
            r_max,
            layout,
        })
    }

    pub fn visible(&self) -> impl Iterator<Item = &'a CelestialSample> + '_ {
        self.samples.iter().filter(|s| s.visible())
    }

    /// Visible samples projected under the configured convention, in input order.
    pub fn project_visible(&self) -> Vec<ProjectedPoint> {
        let out: Vec<ProjectedPoint> = self
            .visible()
            .map(|s| ProjectedPoint {
                coords: project(
                    s.altitude_deg,
                    s.azimuth_deg,
                    self.cfg.projection,
                    self.cfg.radius,
                ),
                size: self.cfg.size_scale.size_from_magnitude(s.magnitude),
                alpha: alpha_from_altitude(s.altitude_deg),
                color: color_for(&s.name).to_string(),
                sample: s.clone(),
            })
            .collect();
        info!(
            "{} of {} objects above the horizon",
            out.len(),
            self.samples.len()
        );
        for s in self.samples.iter().filter(|s| !s.visible()) {
            debug!("dropping {} at altitude {:.2}", s.name, s.altitude_deg);
        }
        out
    }
}
