//! The high level API for processing whole images.

mod pipeline;

pub use pipeline::{ImageColors, Pipeline};
