//! A library to visualize an image's color distribution by collecting its unique
//! colors and reducing them to a small display palette via median cut.
//!
//! `chromacut` is the engine behind a color-graphing frontend: the frontend hands
//! over a decoded image and gets back two things it can render however it likes:
//!
//! 1. A deduplicated list of sampled colors (discovery order preserved).
//! 2. A palette of at most [`PaletteSize`] colors, sorted by perceptual luminance.
//!
//! The pieces are usable on their own:
//! - [`ColorSet`]: a 2^24-bit membership set over the RGB cube with a combined
//!   test-and-mark operation.
//! - [`sample_unique_colors`]: bounded, seeded random sampling of an image into
//!   a capped unique-color list.
//! - [`median_cut_palette`]: recursive widest-channel median-cut bucketing.
//! - [`Pipeline`]: wires the above together and owns the reusable [`ColorSet`].
//!
//! # Examples
//!
//! ```
//! use chromacut::{ImageRef, Pipeline};
//! use palette::Srgb;
//!
//! let pixels = vec![
//!     Srgb::new(255u8, 0, 0),
//!     Srgb::new(255, 0, 0),
//!     Srgb::new(0, 255, 0),
//!     Srgb::new(0, 0, 255),
//! ];
//! let image = ImageRef::new(2, 2, &pixels).unwrap();
//!
//! let mut pipeline = Pipeline::new();
//! let colors = pipeline.process(image);
//!
//! assert_eq!(colors.unique_colors().len(), 3);
//! assert!(colors.palette().len() <= 16);
//! ```
//!
//! Color types come from the [`palette`] crate; any color consisting of 3 `u8`
//! components works (see [`ColorComponents`]). Alpha is outside the keyed color
//! space: strip it at the boundary, palette entries are opaque by construction.
//!
//! # Features
//!
//! - `std` (default): disable for `no_std` + `alloc` environments.
//! - `image`: conversions from the [`image`](crate::deps::image) crate's buffers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::unwrap_used, clippy::expect_used)]

extern crate alloc;

pub mod deps;
mod sample;
mod seen;
mod traits;

mod api;
mod quantize;
mod types;

pub use api::*;
pub use quantize::*;
pub use sample::*;
pub use seen::*;
pub use traits::*;
pub use types::*;

/// The maximum number of pixels in an image supported by this crate.
pub const MAX_PIXELS: u32 = u32::MAX;

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use palette::Srgb;

    /// An 8x8x8 grid of colors spread over the RGB cube.
    pub fn test_data_512() -> Vec<Srgb<u8>> {
        let mut colors = Vec::with_capacity(512);
        for r in 0..8u16 {
            for g in 0..8u16 {
                for b in 0..8u16 {
                    #[allow(clippy::cast_possible_truncation)]
                    colors.push(Srgb::new(
                        (r * 255 / 7) as u8,
                        (g * 255 / 7) as u8,
                        (b * 255 / 7) as u8,
                    ));
                }
            }
        }
        colors
    }

    /// A grayscale ramp with the given number of steps.
    pub fn gray_ramp(steps: u16) -> Vec<Srgb<u8>> {
        (0..steps)
            .map(|i| {
                #[allow(clippy::cast_possible_truncation)]
                let v = (u32::from(i) * 255 / u32::from(steps - 1)) as u8;
                Srgb::new(v, v, v)
            })
            .collect()
    }
}
