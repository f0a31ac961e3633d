//! Median-cut palette generation.
//!
//! The quantizer starts with one bucket spanning the whole unique-color list and
//! repeatedly splits the bucket with the widest channel range at its median,
//! until the requested palette size is reached or no bucket has a range worth
//! splitting. Each final bucket is averaged into one palette entry.
//!
//! Buckets are `(start, len)` views over a single scratch buffer, so splits are
//! in-place slice sorts with no per-bucket copies.

use crate::{ColorComponents, PaletteBuf, PaletteSize};
use alloc::vec::Vec;
use palette::cast::{self, AsArrays as _};

/// A contiguous view into the scratch color buffer with cached channel bounds.
#[derive(Debug, Clone, Copy)]
struct Bucket {
    /// Offset of the first color in the scratch buffer.
    start: usize,
    /// Number of colors in the view.
    len: usize,
    /// Per-channel minimum over the view.
    min: [u8; 3],
    /// Per-channel maximum over the view.
    max: [u8; 3],
    /// The channel with the largest `max - min` spread, ties resolved R, G, B.
    widest: usize,
}

impl Bucket {
    /// Compute the bounds and widest channel of `scratch[start..start + len]`.
    ///
    /// `len` must be at least 1.
    fn new(scratch: &[[u8; 3]], start: usize, len: usize) -> Self {
        let mut min = [u8::MAX; 3];
        let mut max = [u8::MIN; 3];
        for color in &scratch[start..start + len] {
            for channel in 0..3 {
                min[channel] = min[channel].min(color[channel]);
                max[channel] = max[channel].max(color[channel]);
            }
        }

        let [r, g, b] = [0usize, 1, 2].map(|channel| max[channel] - min[channel]);
        let widest = if r >= g && r >= b {
            0
        } else if g >= b {
            1
        } else {
            2
        };

        Self { start, len, min, max, widest }
    }

    /// The spread of the widest channel.
    #[inline]
    fn range(&self) -> u8 {
        self.max[self.widest] - self.min[self.widest]
    }

    /// The per-channel arithmetic mean over the view, truncated.
    fn average(&self, scratch: &[[u8; 3]]) -> [u8; 3] {
        let mut sums = [0u32; 3];
        for color in &scratch[self.start..self.start + self.len] {
            for channel in 0..3 {
                sums[channel] += u32::from(color[channel]);
            }
        }
        #[allow(clippy::cast_possible_truncation)]
        sums.map(|sum| (sum / self.len as u32) as u8)
    }
}

/// Reduce a list of unique colors to a palette of at most `size` entries using
/// median cut.
///
/// Splitting stops early once no remaining bucket has a channel spread greater
/// than one, so the result may hold fewer than `size` entries; it is empty
/// exactly when `colors` is empty. The output is deterministic: bucket
/// selection breaks ties toward earlier buckets, the in-bucket sort is stable,
/// and averages truncate.
///
/// Entries are emitted in bucket order. Use
/// [`PaletteBuf::sort_by_luminance`] to put them in presentation order.
///
/// # Examples
///
/// ```
/// use chromacut::{PaletteSize, median_cut_palette};
/// use palette::Srgb;
///
/// let colors = [
///     Srgb::new(0u8, 0, 0),
///     Srgb::new(128, 128, 128),
///     Srgb::new(255, 255, 255),
/// ];
/// let palette = median_cut_palette(&colors, PaletteSize::try_from_u16(2).unwrap());
/// assert_eq!(palette.as_slice(), &[Srgb::new(0, 0, 0), Srgb::new(191, 191, 191)]);
/// ```
#[must_use]
pub fn median_cut_palette<Color: ColorComponents<u8, 3>>(
    colors: &[Color],
    size: PaletteSize,
) -> PaletteBuf<Color> {
    if colors.is_empty() {
        return PaletteBuf::default();
    }

    let mut scratch = colors.as_arrays().to_vec();
    let mut buckets = Vec::with_capacity(size.as_usize());
    buckets.push(Bucket::new(&scratch, 0, scratch.len()));

    while buckets.len() < size.as_usize() {
        // The bucket with the largest spread; the first one wins ties.
        let mut index = 0;
        for (i, bucket) in buckets.iter().enumerate().skip(1) {
            if bucket.range() > buckets[index].range() {
                index = i;
            }
        }

        if buckets[index].range() <= 1 {
            log::debug!(
                "stopping at {} of {size} buckets, no channel spread above 1 remains",
                buckets.len(),
            );
            break;
        }

        let Bucket { start, len, widest, .. } = buckets[index];
        // Stable, so equal channel values keep their discovery order.
        scratch[start..start + len].sort_by_key(|color| color[widest]);

        let half = len / 2;
        buckets[index] = Bucket::new(&scratch, start, half);
        buckets.insert(index + 1, Bucket::new(&scratch, start + half, len - half));
    }

    let entries = buckets
        .iter()
        .map(|bucket| cast::from_array(bucket.average(&scratch)))
        .collect();
    PaletteBuf::new_unchecked(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;
    use palette::Srgb;

    fn size(k: u16) -> PaletteSize {
        PaletteSize::try_from_u16(k).unwrap()
    }

    #[test]
    fn empty_input_gives_empty_palette() {
        let palette = median_cut_palette::<Srgb<u8>>(&[], size(16));
        assert!(palette.is_empty());
    }

    #[test]
    fn single_color_gives_single_entry() {
        let colors = [Srgb::new(10u8, 20, 30)];
        let palette = median_cut_palette(&colors, size(16));
        assert_eq!(palette.as_slice(), &colors);
    }

    #[test]
    fn grayscale_split_truncates_averages() {
        let colors = [
            Srgb::new(0u8, 0, 0),
            Srgb::new(128, 128, 128),
            Srgb::new(255, 255, 255),
        ];
        let palette = median_cut_palette(&colors, size(2));
        // Median split at index 1: {black} and {gray, white}; (128 + 255) / 2 = 191.
        assert_eq!(
            palette.as_slice(),
            &[Srgb::new(0u8, 0, 0), Srgb::new(191, 191, 191)]
        );
    }

    #[test]
    fn stops_early_when_out_of_splits() {
        let colors = [Srgb::new(0u8, 0, 0), Srgb::new(255u8, 255, 255)];
        let palette = median_cut_palette(&colors, size(16));
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn adjacent_values_are_not_split() {
        // Spread of 1 in every channel is below the splitting threshold.
        let colors = [Srgb::new(100u8, 100, 100), Srgb::new(101u8, 101, 101)];
        let palette = median_cut_palette(&colors, size(16));
        assert_eq!(palette.as_slice(), &[Srgb::new(100u8, 100, 100)]);
    }

    #[test]
    fn palette_size_is_an_upper_bound() {
        let colors = test_data_512();
        for k in [1u16, 2, 3, 16, 256] {
            let palette = median_cut_palette(&colors, size(k));
            assert!(!palette.is_empty());
            assert!(palette.len() <= k as usize);
        }
    }

    #[test]
    fn full_ramp_fills_requested_size() {
        let colors = gray_ramp(256);
        let palette = median_cut_palette(&colors, size(16));
        assert_eq!(palette.len(), 16);
    }

    #[test]
    fn red_green_clusters_separate() {
        let colors = [
            Srgb::new(250u8, 0, 0),
            Srgb::new(255, 0, 0),
            Srgb::new(0, 250, 0),
            Srgb::new(0, 255, 0),
        ];
        let palette = median_cut_palette(&colors, size(2));
        assert_eq!(palette.len(), 2);
        assert!(palette.as_slice().contains(&Srgb::new(252u8, 0, 0)));
        assert!(palette.as_slice().contains(&Srgb::new(0u8, 252, 0)));
    }

    #[test]
    fn deterministic_for_equal_input() {
        let colors = test_data_512();
        let first = median_cut_palette(&colors, size(16));
        let second = median_cut_palette(&colors, size(16));
        assert_eq!(first, second);
    }
}
