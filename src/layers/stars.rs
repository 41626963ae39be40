use svg::node::element::{Circle, Group};

use crate::layers::{group_with_class, Layer};
use crate::layout::ChartLayout;
use crate::scene::PolarScene;
use crate::types::Polar;

pub struct StarsLayer {
    opacity: f64,
}
impl StarsLayer {
    pub fn new() -> Self {
        Self { opacity: 0.3 }
    }
}

impl Layer for StarsLayer {
    fn render(&self, scene: &PolarScene, layout: &ChartLayout) -> Group {
        let mut g = group_with_class("stars");

        for s in &scene.stars {
            let p = layout.polar_to_pixels(Polar {
                theta: s.theta,
                r: s.r,
            });
            let c = Circle::new()
                .set("class", "star")
                .set("cx", p.x)
                .set("cy", p.y)
                .set("r", s.size.sqrt() / 2.0)
                .set("opacity", self.opacity);
            g = g.add(c);
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::PolarScene;
    use crate::test_utils::make_context;

    #[test]
    fn one_circle_per_background_star() {
        let ctx = make_context(&[], |cfg| cfg.star_field.count = 12);
        let scene = PolarScene::build(&ctx);
        let svg = StarsLayer::new().render(&scene, &ctx.layout).to_string();
        assert_eq!(svg.matches("<circle").count(), 12);
    }
}
