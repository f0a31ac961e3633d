use crate::{
    ColorComponents, ColorSet, ImageRef, PaletteBuf, PaletteSize, SampleOptions,
    median_cut_palette, sample_unique_colors,
};
use alloc::vec::Vec;

/// The sampling and quantization pipeline for whole images.
///
/// A [`Pipeline`] owns the [`ColorSet`] so its 2 MiB bit buffer is allocated
/// once and reused across images; [`process`](Pipeline::process) clears it
/// before every pass. Processing a new image produces a fresh [`ImageColors`],
/// fully built before it is returned, so consumers swap their previous outputs
/// wholesale and no stale state survives a drag-and-drop of the next image.
///
/// # Examples
///
/// ```
/// use chromacut::{ImageRef, PaletteSize, Pipeline, SampleOptions, luminance};
/// use palette::Srgb;
///
/// let pixels = vec![
///     Srgb::new(255u8, 0, 0),
///     Srgb::new(0, 255, 0),
///     Srgb::new(0, 0, 255),
///     Srgb::new(255, 255, 255),
/// ];
/// let image = ImageRef::new(2, 2, &pixels).unwrap();
///
/// let mut pipeline = Pipeline::new()
///     .palette_size(PaletteSize::try_from_u16(8).unwrap())
///     .sample_options(SampleOptions::new().seed(1));
/// let colors = pipeline.process(image);
///
/// assert!(colors.palette().len() <= 8);
/// for pair in colors.palette().windows(2) {
///     assert!(luminance(pair[0]) <= luminance(pair[1]));
/// }
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    /// The seen-color set reused across processing passes.
    seen: ColorSet,
    /// The options for the sampling stage.
    sample_options: SampleOptions,
    /// The requested number of colors in the palette.
    palette_size: PaletteSize,
}

impl Pipeline {
    /// Create a new [`Pipeline`] with default options.
    ///
    /// This allocates the backing [`ColorSet`].
    pub fn new() -> Self {
        Self {
            seen: ColorSet::new(),
            sample_options: SampleOptions::new(),
            palette_size: PaletteSize::DEFAULT,
        }
    }

    /// Sets the options for the sampling stage.
    ///
    /// See the docs for [`SampleOptions`] for more information.
    #[inline]
    pub fn sample_options(mut self, options: SampleOptions) -> Self {
        self.sample_options = options;
        self
    }

    /// Sets the palette size which determines the maximum number of colors to have in the palette.
    ///
    /// See the docs for [`PaletteSize`] for more information.
    ///
    /// The default palette size is [`PaletteSize::DEFAULT`].
    #[inline]
    pub fn palette_size(mut self, size: PaletteSize) -> Self {
        self.palette_size = size;
        self
    }

    /// Returns the current sampling options.
    #[inline]
    pub fn get_sample_options(&self) -> SampleOptions {
        self.sample_options
    }

    /// Returns the current palette size.
    #[inline]
    pub fn get_palette_size(&self) -> PaletteSize {
        self.palette_size
    }

    /// Sample `image` and quantize the result into a luminance-ordered palette.
    ///
    /// This runs the full pipeline: clear the seen-color set, collect a capped
    /// list of unique colors, median-cut them into at most
    /// [`palette_size`](Pipeline::palette_size) entries, and sort the palette
    /// ascending by luminance.
    ///
    /// Degenerate inputs are not errors: an empty image yields empty outputs,
    /// and few unique colors yield a short palette.
    pub fn process<Color: ColorComponents<u8, 3>>(
        &mut self,
        image: ImageRef<'_, Color>,
    ) -> ImageColors<Color> {
        self.seen.clear();
        let unique_colors = sample_unique_colors(image, &mut self.seen, self.sample_options);
        let mut palette = median_cut_palette(&unique_colors, self.palette_size);
        palette.sort_by_luminance();
        log::debug!(
            "processed {}x{} image into {} unique colors and a {} color palette",
            image.width(),
            image.height(),
            unique_colors.len(),
            palette.len(),
        );
        ImageColors { unique_colors, palette }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// The outputs of one [`Pipeline::process`] pass over an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageColors<Color> {
    /// The sampled unique colors in discovery order.
    unique_colors: Vec<Color>,
    /// The palette, sorted ascending by luminance.
    palette: PaletteBuf<Color>,
}

impl<Color> ImageColors<Color> {
    /// Returns the sampled unique colors in discovery order.
    #[inline]
    pub fn unique_colors(&self) -> &[Color] {
        &self.unique_colors
    }

    /// Returns the palette, sorted ascending by luminance.
    #[inline]
    pub fn palette(&self) -> &PaletteBuf<Color> {
        &self.palette
    }

    /// Returns the unique color list and the palette.
    #[inline]
    pub fn into_parts(self) -> (Vec<Color>, PaletteBuf<Color>) {
        (self.unique_colors, self.palette)
    }
}
