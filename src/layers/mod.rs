use svg::node::element::{Group, Text as TextEl};

use crate::layout::ChartLayout;
use crate::scene::PolarScene;

pub trait Layer {
    /// Produce an SVG group for this layer.
    fn render(&self, scene: &PolarScene, layout: &ChartLayout) -> Group;
}

pub fn group_with_class(class: &str) -> Group {
    let mut g = Group::new();
    g = g.set("class", class);
    g
}

pub fn text(class: &str, x: f64, y: f64, anchor: &str, content: &str) -> TextEl {
    TextEl::new(content)
        .set("class", class)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
}

pub mod frame;
pub mod grid;
pub mod horizon;
pub mod labels;
pub mod objects;
pub mod stars;

pub use frame::FrameLayer;
pub use grid::GridLayer;
pub use horizon::HorizonLayer;
pub use labels::LabelsLayer;
pub use objects::ObjectsLayer;
pub use stars::StarsLayer;
