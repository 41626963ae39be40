//! Sky map core: projects observed bodies onto a polar chart or a 3D dome,
//! picks which of them get labels, places those labels to avoid collisions,
//! and frames the view around what is above the horizon.

pub mod chart;
pub mod config;
pub mod context;
pub mod data;
pub mod encoding;
pub mod error;
pub mod geometry;
pub mod labels;
pub mod layers;
pub mod layout;
pub mod scene;
pub mod types;
pub mod zoom;

#[cfg(test)]
mod test_utils;
