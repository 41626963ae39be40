use log::warn;
use std::fs;
use svg::node::element::{Circle, ClipPath, Definitions, Group, Style};
use svg::Document;

use crate::context::SkyContext;
use crate::layers::{
    FrameLayer, GridLayer, HorizonLayer, LabelsLayer, Layer, ObjectsLayer, StarsLayer,
};
use crate::scene::PolarScene;

// Load the default css for embedding
const DEFAULT_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/styles/chart.css"));

pub struct Chart<'a> {
    pub context: SkyContext<'a>,
    css_path: Option<String>,
}

impl<'a> Chart<'a> {
    pub fn new(context: SkyContext<'a>, css_path: Option<String>) -> Self {
        Self { context, css_path }
    }

    fn load_css_text(&self) -> String {
        if let Some(path) = &self.css_path {
            match fs::read_to_string(path) {
                Ok(text) => return text,
                Err(e) => warn!("could not read css {path}: {e}; using embedded style"),
            }
        }
        // Embedded fallback
        DEFAULT_CSS.to_owned()
    }

    pub fn draw_document(&self) -> Document {
        let w = self.context.cfg.width;
        let h = self.context.cfg.height;
        let l = &self.context.layout;
        let scene = PolarScene::build(&self.context);

        // Layer stack, back to front
        let clipped_layers: Vec<Box<dyn Layer>> = vec![
            Box::new(StarsLayer::new()),
            Box::new(GridLayer::new()),
            Box::new(HorizonLayer::new()),
            Box::new(ObjectsLayer::new()),
            Box::new(LabelsLayer::new()),
        ];
        let unclipped_layers: Vec<Box<dyn Layer>> = vec![Box::new(FrameLayer::new())];

        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", w)
            .set("height", h)
            .set("class", "chart");

        let css = self.load_css_text();
        if !css.is_empty() {
            doc = doc.add(Style::new(css));
        }

        let disk = || {
            Circle::new()
                .set("cx", l.center_px.x)
                .set("cy", l.center_px.y)
                .set("r", l.radius_px)
        };
        let clip = ClipPath::new().set("id", "clip-sky").add(disk());
        doc = doc.add(Definitions::new().add(clip));
        doc = doc.add(disk().set("class", "sky"));

        // Clipped layers inside the plotted disk
        let mut clipped = Group::new().set("clip-path", "url(#clip-sky)");
        for layer in clipped_layers {
            clipped = clipped.add(layer.render(&scene, l));
        }
        doc = doc.add(clipped);

        // Frame, cardinals and ticks sit outside the disk
        for layer in unclipped_layers {
            doc = doc.add(layer.render(&scene, l));
        }

        doc
    }

    pub fn to_file(&self, path: &str) -> std::io::Result<()> {
        let doc = self.draw_document();
        svg::save(path, &doc)
    }
}
