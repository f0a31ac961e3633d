mod image;
mod palette;

pub use image::*;
pub use palette::*;
