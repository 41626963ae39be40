use svg::node::element::Group;

use crate::layers::{group_with_class, text, Layer};
use crate::layout::ChartLayout;
use crate::scene::PolarScene;
use crate::types::Polar;

pub struct LabelsLayer;
impl LabelsLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for LabelsLayer {
    fn render(&self, scene: &PolarScene, layout: &ChartLayout) -> Group {
        let mut g = group_with_class("labels");

        for m in &scene.markers {
            let Some(label) = &m.label else {
                continue;
            };
            let p = layout.polar_to_pixels(Polar {
                theta: m.theta,
                r: m.r,
            });
            g = g.add(
                text(
                    "object-label",
                    p.x + label.dx,
                    p.y + label.dy,
                    &label.anchor,
                    &label.text,
                )
                .set("dominant-baseline", "middle"),
            );
        }

        g
    }
}
