use crate::config::SkyMapConfig;
use crate::geometry::{polar, to_pixels};
use crate::labels::ScreenTransform;
use crate::types::{Point, Polar, ProjectedPoint};

#[derive(Debug, Clone, Copy)]
pub struct ChartLayout {
    pub plot_x: f64,
    pub plot_y: f64,
    pub plot_w: f64,
    pub plot_h: f64,
    pub center_px: Point,
    pub radius_px: f64,
    pub r_max: f64,
    /// Pixels per degree of zenith distance.
    pub scale: f64,
}

impl ChartLayout {
    pub fn new(cfg: &SkyMapConfig, r_max: f64) -> Self {
        let plot_x = cfg.margin.left as f64;
        let plot_y = cfg.margin.top as f64;
        let plot_w = cfg
            .width
            .saturating_sub(cfg.margin.left + cfg.margin.right) as f64;
        let plot_h = cfg
            .height
            .saturating_sub(cfg.margin.top + cfg.margin.bottom) as f64;
        let center_px = Point {
            x: plot_x + plot_w / 2.0,
            y: plot_y + plot_h / 2.0,
        };
        let radius_px = plot_w.min(plot_h) / 2.0;
        let scale = radius_px / r_max;

        Self {
            plot_x,
            plot_y,
            plot_w,
            plot_h,
            center_px,
            radius_px,
            r_max,
            scale,
        }
    }

    pub fn polar_to_pixels(&self, p: Polar) -> Point {
        to_pixels(p, self.center_px, self.scale)
    }
}

// Labels are laid out on the polar map whatever the output convention.
impl ScreenTransform for ChartLayout {
    fn to_screen(&self, point: &ProjectedPoint) -> Point {
        self.polar_to_pixels(polar(point.sample.altitude_deg, point.sample.azimuth_deg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{approx, polar_point};

    #[test]
    fn layout_centres_plot_and_scales_to_r_max() {
        let cfg = SkyMapConfig::default();
        let l = ChartLayout::new(&cfg, 90.0);
        assert!(approx(l.plot_w, 720.0, 1e-12));
        assert!(approx(l.center_px.x, 400.0, 1e-12));
        assert!(approx(l.center_px.y, 400.0, 1e-12));
        assert!(approx(l.radius_px, 360.0, 1e-12));
        assert!(approx(l.scale, 4.0, 1e-12));

        let zoomed = ChartLayout::new(&cfg, 45.0);
        assert!(approx(zoomed.scale, 8.0, 1e-12));
    }

    #[test]
    fn r_max_lands_on_the_plot_edge() {
        let cfg = SkyMapConfig::default();
        let l = ChartLayout::new(&cfg, 30.0);
        let p = l.polar_to_pixels(Polar { theta: 0.0, r: 30.0 });
        assert!(approx(p.y, l.center_px.y - l.radius_px, 1e-9));
    }

    #[test]
    fn screen_transform_uses_altitude_and_azimuth() {
        let cfg = SkyMapConfig::default();
        let l = ChartLayout::new(&cfg, 90.0);
        let mut p = polar_point("Mars", 0.0, 0.0, 0.5);
        p.sample.altitude_deg = 0.0;
        p.sample.azimuth_deg = 90.0;
        let s = l.to_screen(&p);
        assert!(approx(s.x, 400.0 + 360.0, 1e-9));
        assert!(approx(s.y, 400.0, 1e-9));
    }

    #[test]
    fn oversized_margins_do_not_underflow() {
        let mut cfg = SkyMapConfig::default();
        cfg.width = 50;
        let l = ChartLayout::new(&cfg, 90.0);
        assert_eq!(l.plot_w, 0.0);
    }
}
