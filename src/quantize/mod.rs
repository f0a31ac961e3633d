//! Color quantization functions.

mod median_cut;

pub use median_cut::*;
