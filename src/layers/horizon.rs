use svg::node::element::{Circle, Group};

use crate::layers::{group_with_class, Layer};
use crate::layout::ChartLayout;
use crate::scene::PolarScene;

pub struct HorizonLayer;
impl HorizonLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for HorizonLayer {
    fn render(&self, scene: &PolarScene, layout: &ChartLayout) -> Group {
        let mut g = group_with_class("horizon");

        // Zenith distance 90 is the horizon; clipped away when zoomed in
        if scene.show_horizon {
            let c = layout.center_px;
            g = g.add(
                Circle::new()
                    .set("fill", "none")
                    .set("cx", c.x)
                    .set("cy", c.y)
                    .set("r", 90.0 * layout.scale),
            );
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_context;

    #[test]
    fn horizon_ring_follows_toggle() {
        let ctx = make_context(&[], |_| {});
        let scene = PolarScene::build(&ctx);
        let svg = HorizonLayer::new().render(&scene, &ctx.layout).to_string();
        assert!(svg.contains("<circle"));
        assert!(svg.contains(r#"r="360""#));

        let ctx = make_context(&[], |cfg| cfg.show_horizon = false);
        let scene = PolarScene::build(&ctx);
        let svg = HorizonLayer::new().render(&scene, &ctx.layout).to_string();
        assert!(!svg.contains("<circle"));
    }
}
