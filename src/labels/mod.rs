pub mod placement;
pub mod selection;

pub use placement::{label_box, place_labels, Placement};
pub use selection::{select_labels, ScreenTransform};
