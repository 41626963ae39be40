use svg::node::element::Group as G;
use svg::node::element::{Circle, Group};

use crate::layers::{group_with_class, Layer};
use crate::layout::ChartLayout;
use crate::scene::PolarScene;
use crate::types::Polar;

/// Circle radius in pixels for a marker whose size is an area in px².
pub fn marker_radius(size: f64) -> f64 {
    size.max(0.0).sqrt() / 2.0
}

pub struct ObjectsLayer {
    glow_scale: f64,
    glow_alpha: f64,
}
impl ObjectsLayer {
    pub fn new() -> Self {
        Self {
            glow_scale: 1.8,
            glow_alpha: 0.25,
        }
    }
}

impl Layer for ObjectsLayer {
    fn render(&self, scene: &PolarScene, layout: &ChartLayout) -> Group {
        let mut g = group_with_class("objects");

        for m in &scene.markers {
            let p = layout.polar_to_pixels(Polar {
                theta: m.theta,
                r: m.r,
            });
            let gg = G::new()
                .set("id", m.name.as_str())
                .set("class", "object")
                .add(
                    Circle::new()
                        .set("class", "glow")
                        .set("cx", p.x)
                        .set("cy", p.y)
                        .set("r", marker_radius(m.size * self.glow_scale))
                        .set("fill", m.color.as_str())
                        .set("opacity", m.alpha * self.glow_alpha),
                )
                .add(
                    Circle::new()
                        .set("class", "body")
                        .set("cx", p.x)
                        .set("cy", p.y)
                        .set("r", marker_radius(m.size))
                        .set("fill", m.color.as_str())
                        .set("opacity", m.alpha),
                );
            g = g.add(gg);
        }

        g
    }
}
