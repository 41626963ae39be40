use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::HashMap;
use std::f64::consts::TAU;

use crate::context::SkyContext;
use crate::data::catalog::dome_radius_for;
use crate::geometry::{polar, project_3d};
use crate::labels::{place_labels, select_labels, Placement};
use crate::types::{CelestialSample, Coords, Polar, Projection, ProjectedPoint, Vec3};
use crate::zoom::{frame_camera, CameraFrame};

pub const CARDINALS: [(&str, f64); 4] = [("N", 0.0), ("E", 90.0), ("S", 180.0), ("W", 270.0)];

#[derive(Debug, Clone, Serialize)]
pub struct RadialTick {
    pub r: f64,
    pub label: String,
}

/// Ticks at 0, 1/3, 2/3 and all of `r_max`, labelled by altitude.
pub fn radial_ticks(r_max: f64) -> Vec<RadialTick> {
    (0..=3)
        .map(|i| {
            let r = r_max * i as f64 / 3.0;
            let label = if i == 0 {
                "Zenith".to_string()
            } else if i == 3 && r >= 90.0 {
                "Horizon".to_string()
            } else {
                format!("{:.0}°", 90.0 - r)
            };
            RadialTick { r, label }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct PolarLabel {
    pub text: String,
    pub dx: f64,
    pub dy: f64,
    pub anchor: String,
    pub overlap: f64,
}

impl From<&Placement> for PolarLabel {
    fn from(p: &Placement) -> Self {
        Self {
            text: p.name.clone(),
            dx: p.dx,
            dy: p.dy,
            anchor: p.text_anchor().to_string(),
            overlap: p.overlap,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PolarMarker {
    pub name: String,
    pub theta: f64,
    pub r: f64,
    pub size: f64,
    pub alpha: f64,
    pub color: String,
    pub label: Option<PolarLabel>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BackgroundStar {
    pub theta: f64,
    pub r: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Cardinal {
    pub label: String,
    pub theta: f64,
    pub r: f64,
}

/// Everything a 2D renderer needs to draw the polar sky map.
#[derive(Debug, Clone, Serialize)]
pub struct PolarScene {
    pub title: Option<String>,
    pub r_max: f64,
    pub ticks: Vec<RadialTick>,
    pub markers: Vec<PolarMarker>,
    pub cardinals: Vec<Cardinal>,
    pub stars: Vec<BackgroundStar>,
    pub show_horizon: bool,
    pub show_grid: bool,
}

fn label_lookup(placements: &[Placement]) -> HashMap<&str, &Placement> {
    placements.iter().map(|p| (p.name.as_str(), p)).collect()
}

fn select_and_place(ctx: &SkyContext<'_>, points: &[ProjectedPoint]) -> Vec<Placement> {
    let lc = &ctx.cfg.labels;
    let selected = select_labels(
        &ctx.layout,
        points,
        lc.mode,
        lc.max_labels,
        lc.cluster_px,
    );
    let placements = place_labels(&ctx.layout, &selected, lc);
    info!(
        "labelled {} of {} visible objects",
        placements.len(),
        points.len()
    );
    placements
}

impl PolarScene {
    pub fn build(ctx: &SkyContext<'_>) -> Self {
        let points = ctx.project_visible();
        let placements = select_and_place(ctx, &points);
        let labels = label_lookup(&placements);

        let markers = points
            .iter()
            .map(|p| {
                let Polar { theta, r } = match p.coords {
                    Coords::Polar(pp) => pp,
                    Coords::Cartesian(_) => polar(p.sample.altitude_deg, p.sample.azimuth_deg),
                };
                PolarMarker {
                    name: p.name().to_string(),
                    theta,
                    r,
                    size: p.size,
                    alpha: p.alpha,
                    color: p.color.clone(),
                    label: labels.get(p.name()).map(|pl| PolarLabel::from(*pl)),
                }
            })
            .collect();

        let cardinal_r = ctx.r_max * 92.0 / 90.0;
        let cardinals = CARDINALS
            .iter()
            .map(|&(label, az)| Cardinal {
                label: label.to_string(),
                theta: az.to_radians(),
                r: cardinal_r,
            })
            .collect();

        let sf = ctx.cfg.star_field;
        let stars = if sf.enabled {
            let mut rng = StdRng::seed_from_u64(sf.seed);
            (0..sf.count)
                .map(|_| BackgroundStar {
                    theta: rng.random_range(0.0..TAU),
                    r: rng.random_range(0.0..ctx.r_max),
                    size: rng.random_range(1.0..4.0),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            title: ctx.cfg.title.clone(),
            r_max: ctx.r_max,
            ticks: radial_ticks(ctx.r_max),
            markers,
            cardinals,
            stars,
            show_horizon: ctx.cfg.show_horizon,
            show_grid: ctx.cfg.show_grid,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DomeObject {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Point-sprite size in pixels.
    pub size: f64,
    /// Sphere radius in world units.
    pub radius: f64,
    pub color: String,
    pub alpha: f64,
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomeCardinal {
    pub label: String,
    pub position: Vec3,
}

/// Everything a 3D renderer needs to draw the dome view.
#[derive(Debug, Clone, Serialize)]
pub struct DomeScene {
    pub title: Option<String>,
    pub projection: Projection,
    pub radius: f64,
    pub objects: Vec<DomeObject>,
    pub cardinals: Vec<DomeCardinal>,
    pub horizon: Option<Vec<Vec3>>,
    pub grid_rings: Vec<Vec<Vec3>>,
    pub stars: Vec<Vec3>,
    pub camera: CameraFrame,
}

const RING_SEGMENTS: usize = 64;

fn altitude_ring(projection: Projection, radius: f64, alt_deg: f64) -> Vec<Vec3> {
    (0..=RING_SEGMENTS)
        .map(|i| {
            let az = 360.0 * i as f64 / RING_SEGMENTS as f64;
            project_3d(alt_deg, az, projection, radius)
        })
        .collect()
}

// Uniform on a sphere of the given radius.
fn star_sphere(count: usize, seed: u64, radius: f64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let theta = rng.random_range(0.0..TAU);
            let phi = (2.0 * rng.random::<f64>() - 1.0).acos();
            Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            )
        })
        .collect()
}

impl DomeScene {
    pub fn build(ctx: &SkyContext<'_>) -> Self {
        let cfg = &ctx.cfg;
        let projection = cfg.projection;
        let radius = cfg.radius;

        let points = ctx.project_visible();
        let placements = select_and_place(ctx, &points);
        let labels = label_lookup(&placements);

        let objects: Vec<DomeObject> = points
            .iter()
            .map(|p| {
                let v = match p.coords {
                    Coords::Cartesian(v) => v,
                    Coords::Polar(_) => project_3d(
                        p.sample.altitude_deg,
                        p.sample.azimuth_deg,
                        projection,
                        radius,
                    ),
                };
                DomeObject {
                    name: p.name().to_string(),
                    x: v.x,
                    y: v.y,
                    z: v.z,
                    size: p.size,
                    radius: dome_radius_for(p.name(), radius),
                    color: p.color.clone(),
                    alpha: p.alpha,
                    altitude_deg: p.sample.altitude_deg,
                    azimuth_deg: p.sample.azimuth_deg,
                    label: labels.get(p.name()).map(|pl| pl.name.clone()),
                }
            })
            .collect();

        let cardinals: Vec<DomeCardinal> = CARDINALS
            .iter()
            .map(|&(label, az)| DomeCardinal {
                label: label.to_string(),
                position: project_3d(0.0, az, projection, radius * 0.98),
            })
            .collect();

        let horizon = cfg
            .show_horizon
            .then(|| altitude_ring(projection, radius, 0.0));
        let grid_rings: Vec<Vec<Vec3>> = if cfg.show_grid {
            (1..6)
                .map(|k| altitude_ring(projection, radius, 15.0 * k as f64))
                .collect()
        } else {
            Vec::new()
        };

        let stars = if cfg.star_field.enabled {
            star_sphere(cfg.star_field.count, cfg.star_field.seed, radius * 1.5)
        } else {
            Vec::new()
        };

        // Frame everything that gets drawn, background stars included
        let mut geometry: Vec<Vec3> = objects.iter().map(|o| Vec3::new(o.x, o.y, o.z)).collect();
        geometry.extend(cardinals.iter().map(|c| c.position));
        geometry.extend(horizon.iter().flatten().copied());
        geometry.extend(grid_rings.iter().flatten().copied());
        geometry.extend(stars.iter().copied());
        let camera = frame_camera(&geometry, projection, radius, cfg.camera_fov_deg);

        Self {
            title: cfg.title.clone(),
            projection,
            radius,
            objects,
            cardinals,
            horizon,
            grid_rings,
            stars,
            camera,
        }
    }
}

/// One row of the tabular listing.
#[derive(Debug, Clone, Serialize)]
pub struct SkyTableRow {
    pub name: String,
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
    pub magnitude: f64,
    pub visible: bool,
}

/// Every sample, visible or not, highest first.
pub fn sky_table(samples: &[CelestialSample]) -> Vec<SkyTableRow> {
    let mut rows: Vec<SkyTableRow> = samples
        .iter()
        .map(|s| SkyTableRow {
            name: s.name.clone(),
            altitude_deg: s.altitude_deg,
            azimuth_deg: s.azimuth_deg,
            magnitude: s.magnitude,
            visible: s.visible(),
        })
        .collect();
    rows.sort_by(|a, b| b.altitude_deg.total_cmp(&a.altitude_deg));
    rows
}
