use log::debug;
use serde::Serialize;

use crate::config::LabelConfig;
use crate::geometry::Rect;
use crate::labels::selection::ScreenTransform;
use crate::types::{Point, ProjectedPoint};

/// Where a label ended up relative to its marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub name: String,
    pub anchor: Point,
    pub dx: f64,
    pub dy: f64,
    pub bbox: Rect,
    pub overlap: f64,
}

impl Placement {
    /// SVG `text-anchor` matching the side the box extends to.
    pub fn text_anchor(&self) -> &'static str {
        if self.dx > 0.0 {
            "start"
        } else if self.dx < 0.0 {
            "end"
        } else {
            "middle"
        }
    }
}

/// Screen box of `text` drawn at `anchor + offset`: extends right of the
/// offset point for dx > 0, left for dx < 0, centred for dx == 0, and is
/// vertically centred on it.
pub fn label_box(anchor: Point, offset: (f64, f64), text: &str, cfg: &LabelConfig) -> Rect {
    let (dx, dy) = offset;
    let ch = text.chars().count().max(2);
    let w = (ch as f64 * cfg.char_width_px).max(16.0);
    let h = cfg.line_height_px;
    let x = anchor.x + dx;
    let left = if dx > 0.0 {
        x
    } else if dx < 0.0 {
        x - w
    } else {
        x - w / 2.0
    };
    Rect {
        x: left,
        y: anchor.y + dy - h / 2.0,
        w,
        h,
    }
}

/// Greedy label placement, in the order given.
///
/// Each label tries the configured offsets in turn and scores each by the
/// total area its separation-padded box shares with boxes already placed.
/// The first offset scoring zero wins outright; otherwise the lowest score
/// wins, ties going to the earlier offset. Every label is placed, overlapping
/// or not, so the result is order dependent and not globally optimal.
pub fn place_labels<T>(
    transform: &T,
    selected: &[&ProjectedPoint],
    cfg: &LabelConfig,
) -> Vec<Placement>
where
    T: ScreenTransform + ?Sized,
{
    let candidates: &[(f64, f64)] = if cfg.offsets.is_empty() {
        &[(0.0, 0.0)]
    } else {
        &cfg.offsets
    };

    let mut placed: Vec<Rect> = Vec::with_capacity(selected.len());
    let mut out = Vec::with_capacity(selected.len());

    for p in selected {
        let anchor = transform.to_screen(p);
        let mut best: Option<(f64, (f64, f64), Rect)> = None;

        for &offset in candidates {
            let bbox = label_box(anchor, offset, p.name(), cfg);
            let padded = bbox.inflate(cfg.min_separation_px);
            let overlap: f64 = placed.iter().map(|b| padded.intersection_area(b)).sum();

            if best.as_ref().is_none_or(|(o, _, _)| overlap < *o) {
                best = Some((overlap, offset, bbox));
            }
            if overlap == 0.0 {
                break;
            }
        }

        let Some((overlap, (dx, dy), bbox)) = best else {
            continue;
        };
        placed.push(bbox.inflate(cfg.min_separation_px));
        out.push(Placement {
            name: p.name().to_string(),
            anchor,
            dx,
            dy,
            bbox,
            overlap,
        });
    }

    let residual: f64 = out.iter().map(|pl| pl.overlap).sum();
    debug!("placed {} labels, residual overlap {residual:.1} px²", out.len());
    out
}
