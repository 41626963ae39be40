pub mod catalog;
pub mod positions;

pub use positions::{load_samples, samples_from_positions};
