use svg::node::element::{Circle, Group};

use crate::layers::{group_with_class, text, Layer};
use crate::layout::ChartLayout;
use crate::scene::PolarScene;
use crate::types::Polar;

pub struct FrameLayer {
    tick_label_az_deg: f64,
}
impl FrameLayer {
    pub fn new() -> Self {
        Self {
            tick_label_az_deg: 22.5,
        }
    }
}

impl Layer for FrameLayer {
    fn render(&self, scene: &PolarScene, layout: &ChartLayout) -> Group {
        let mut g = group_with_class("frame");
        let c = layout.center_px;

        // Border of the plotted disk
        g = g.add(
            Circle::new()
                .set("class", "border")
                .set("fill", "none")
                .set("cx", c.x)
                .set("cy", c.y)
                .set("r", layout.radius_px),
        );

        for card in &scene.cardinals {
            let p = layout.polar_to_pixels(Polar {
                theta: card.theta,
                r: card.r,
            });
            g = g.add(
                text("cardinal", p.x, p.y, "middle", &card.label)
                    .set("dominant-baseline", "middle"),
            );
        }

        let theta = self.tick_label_az_deg.to_radians();
        for t in &scene.ticks {
            let p = layout.polar_to_pixels(Polar { theta, r: t.r });
            g = g.add(text("tick-label", p.x + 4.0, p.y - 4.0, "start", &t.label));
        }

        if let Some(title) = &scene.title {
            g = g.add(text(
                "title",
                c.x,
                layout.plot_y / 2.0 + 4.0,
                "middle",
                title,
            ));
        }

        g
    }
}
