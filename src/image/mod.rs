//! Image loading, normalization, and saving utilities.

mod load;
mod rgba;
mod save;

pub use load::load_image;
pub use rgba::to_rgba32;
pub use save::{save_png, Compression, Filter};

pub(crate) use save::write_staged;
