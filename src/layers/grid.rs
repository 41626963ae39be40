use svg::node::element::{Circle, Group, Line};

use crate::layers::{group_with_class, Layer};
use crate::layout::ChartLayout;
use crate::scene::PolarScene;
use crate::types::Polar;

pub struct GridLayer {
    step_az_deg: u32,
}
impl GridLayer {
    pub fn new() -> Self {
        Self { step_az_deg: 30 }
    }
}

impl Layer for GridLayer {
    fn render(&self, scene: &PolarScene, layout: &ChartLayout) -> Group {
        let mut g = group_with_class("lines");
        if !scene.show_grid {
            return g;
        }
        let c = layout.center_px;

        // Altitude rings at the radial ticks
        for t in scene.ticks.iter().filter(|t| t.r > 0.0) {
            g = g.add(
                Circle::new()
                    .set("class", "graticule alt")
                    .set("fill", "none")
                    .set("cx", c.x)
                    .set("cy", c.y)
                    .set("r", t.r * layout.scale),
            );
        }

        // Azimuth spokes
        let mut az = 0;
        while az < 360 {
            let edge = layout.polar_to_pixels(Polar {
                theta: (az as f64).to_radians(),
                r: scene.r_max,
            });
            g = g.add(
                Line::new()
                    .set("class", "graticule az")
                    .set("x1", c.x)
                    .set("y1", c.y)
                    .set("x2", edge.x)
                    .set("y2", edge.y),
            );
            az += self.step_az_deg;
        }

        g
    }
}
