//! Bounded random sampling of an image into a capped list of unique colors.

use crate::{ColorComponents, ColorSet, ImageRef};
use alloc::vec::Vec;
use rand::{SeedableRng as _, distr::Uniform, prelude::Distribution as _};
use rand_xoshiro::Xoroshiro128PlusPlus;

/// The various options for random color sampling.
///
/// This struct has a builder API. See the docs for each of the following functions for more details:
/// - [`max_samples`](Self::max_samples)
/// - [`max_unique`](Self::max_unique)
/// - [`seed`](Self::seed)
///
/// # Examples
///
/// ```
/// # use chromacut::SampleOptions;
/// SampleOptions::new()
///     .max_samples(50_000)
///     .max_unique(10_000)
///     .seed(42);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleOptions {
    /// The maximum number of random pixel draws.
    max_samples: u32,
    /// The maximum number of unique colors to collect.
    max_unique: u32,
    /// The seed for the random number generator.
    seed: u64,
}

impl SampleOptions {
    /// Create a new [`SampleOptions`] with default options.
    #[inline]
    pub const fn new() -> Self {
        Self {
            max_samples: 100_000,
            max_unique: 40_000,
            seed: 0,
        }
    }

    /// Sets the maximum number of random pixel draws.
    ///
    /// Sampling always stops after this many draws, whether or not the unique
    /// color cap has been reached. For images with many distinct colors, a
    /// budget that is small relative to the image yields a shorter unique list;
    /// this is a quality degradation, not an error.
    ///
    /// The default sample budget is `100_000`.
    #[inline]
    pub const fn max_samples(self, max_samples: u32) -> Self {
        Self { max_samples, ..self }
    }

    /// Sets the maximum number of unique colors to collect.
    ///
    /// The cap is checked before every draw, so the returned list never holds
    /// more than this many colors.
    ///
    /// The default unique color cap is `40_000`.
    #[inline]
    pub const fn max_unique(self, max_unique: u32) -> Self {
        Self { max_unique, ..self }
    }

    /// Sets the seed number used for the random number generator.
    ///
    /// A fixed seed yields a fixed unique-color list for a fixed image.
    ///
    /// The default seed is `0`.
    #[inline]
    pub const fn seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Returns the current maximum number of draws.
    ///
    /// See [`max_samples`](Self::max_samples) for more information.
    #[inline]
    pub const fn get_max_samples(&self) -> u32 {
        self.max_samples
    }

    /// Returns the current unique color cap.
    ///
    /// See [`max_unique`](Self::max_unique) for more information.
    #[inline]
    pub const fn get_max_unique(&self) -> u32 {
        self.max_unique
    }

    /// Returns the current seed number.
    ///
    /// See [`seed`](Self::seed) for more information.
    #[inline]
    pub const fn get_seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SampleOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Draw random pixels from `image` and collect the unique colors among them.
///
/// Each draw picks a uniformly random pixel and tests it against `seen` via
/// [`ColorSet::test_and_mark`]; fresh colors are appended to the output in
/// discovery order. Sampling stops once
/// [`max_samples`](SampleOptions::max_samples) draws have been made or the
/// output holds [`max_unique`](SampleOptions::max_unique) colors.
///
/// The set is used as-is: colors already marked in `seen` are treated as
/// duplicates. [`Pipeline`](crate::Pipeline) clears the set before every image;
/// callers driving this function directly must do the same, or may skip the
/// clear deliberately to deduplicate across several images.
///
/// An empty image yields an empty list.
///
/// # Examples
///
/// ```
/// use chromacut::{ColorSet, ImageRef, SampleOptions, sample_unique_colors};
/// use palette::Srgb;
///
/// let pixels = vec![Srgb::new(10u8, 20, 30); 16];
/// let image = ImageRef::new(4, 4, &pixels).unwrap();
///
/// let mut seen = ColorSet::new();
/// let unique = sample_unique_colors(image, &mut seen, SampleOptions::new());
/// assert_eq!(unique, vec![Srgb::new(10u8, 20, 30)]);
/// ```
pub fn sample_unique_colors<Color: ColorComponents<u8, 3>>(
    image: ImageRef<'_, Color>,
    seen: &mut ColorSet,
    options: SampleOptions,
) -> Vec<Color> {
    let mut colors = Vec::new();
    if image.is_empty() || options.max_unique == 0 {
        return colors;
    }

    let pixels = image.as_slice();
    #[allow(clippy::expect_used)]
    let distribution = Uniform::new(0, image.num_pixels()).expect("num_pixels != 0");
    let mut rng = Xoroshiro128PlusPlus::seed_from_u64(options.seed);

    let max_unique = options.max_unique as usize;
    for draw in 0..options.max_samples {
        if colors.len() >= max_unique {
            log::debug!("unique color cap of {max_unique} reached after {draw} draws");
            return colors;
        }
        let color = pixels[distribution.sample(&mut rng) as usize];
        if !seen.test_and_mark(color) {
            colors.push(color);
        }
    }
    log::debug!(
        "sample budget of {} exhausted with {} unique colors",
        options.max_samples,
        colors.len(),
    );
    colors
}
