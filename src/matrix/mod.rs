//! Distance matrices and the TSPLIB reader that produces them.

mod distance;
mod loader;

pub use distance::{DistanceMatrix, DIAGONAL};
pub use loader::{load_atsp_file, parse_atsp};
