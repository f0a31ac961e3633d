use crate::ColorComponents;
use alloc::vec::Vec;
use core::{
    error::Error,
    fmt::{self, Debug},
    num::NonZeroU16,
    ops::{Deref, Index},
};
use ordered_float::OrderedFloat;
use palette::cast;

/// The error returned when attempting to convert an out of range integer into a [`PaletteSize`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PaletteSizeFromIntError(());

impl fmt::Display for PaletteSizeFromIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("out of range conversion from integer to palette size")
    }
}

impl Error for PaletteSizeFromIntError {}

/// This type is used to specify the requested number of colors in a palette.
///
/// This is a simple new type wrapper around `u16` with the invariant that it must be
/// in the range `1..=256` specified by [`PaletteSize::MIN`] and [`PaletteSize::MAX`].
///
/// Note that this is an upper bound: quantization stops early once no bucket can
/// be usefully split, so the produced palette may hold fewer colors.
///
/// # Examples
///
/// ```
/// # use chromacut::{PaletteSize, PaletteSizeFromIntError};
/// # fn main() -> Result<(), PaletteSizeFromIntError> {
/// let size: PaletteSize = 64u16.try_into()?;
/// assert_eq!(size.as_u16(), 64);
/// assert_eq!(PaletteSize::try_from_u16(1024), None);
/// assert_eq!(PaletteSize::from_u16_clamped(1024), PaletteSize::MAX);
/// assert_eq!(PaletteSize::DEFAULT.as_u16(), 16);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PaletteSize(NonZeroU16);

impl PaletteSize {
    /// The smallest possible palette size, which is `1`.
    pub const MIN: Self = Self(NonZeroU16::MIN);

    /// The largest possible palette size, which is `256`.
    pub const MAX: Self = Self(NonZeroU16::new(u8::MAX as u16 + 1).unwrap());

    /// The default palette size of `16`, a comfortable swatch count for display.
    pub const DEFAULT: Self = Self(NonZeroU16::new(16).unwrap());

    /// Returns a [`PaletteSize`] as a `u16`.
    #[inline]
    pub const fn as_u16(&self) -> u16 {
        self.0.get()
    }

    /// Returns a [`PaletteSize`] as a `usize`.
    #[inline]
    pub const fn as_usize(&self) -> usize {
        self.as_u16() as usize
    }

    /// Create a [`PaletteSize`] directly from the given [`NonZeroU16`]
    /// without ensuring that it is less than or equal to [`PaletteSize::MAX`].
    #[inline]
    const fn new_unchecked(value: NonZeroU16) -> Self {
        debug_assert!(value.get() <= Self::MAX.as_u16());
        Self(value)
    }

    /// Create a [`PaletteSize`] from a `u16`, returning `None` if the provided `value`
    /// is less than [`PaletteSize::MIN`] or greater than [`PaletteSize::MAX`].
    #[must_use]
    #[inline]
    pub const fn try_from_u16(value: u16) -> Option<Self> {
        if let Some(size) = NonZeroU16::new(value) {
            if size.get() <= Self::MAX.as_u16() {
                Some(Self::new_unchecked(size))
            } else {
                None
            }
        } else {
            None
        }
    }

    /// Create a [`PaletteSize`] from a `u16`, clamping the provided `value` into
    /// the range [`PaletteSize::MIN`]`..=`[`PaletteSize::MAX`].
    #[must_use]
    #[inline]
    pub const fn from_u16_clamped(value: u16) -> Self {
        if value == 0 {
            Self::MIN
        } else if let Some(size) = Self::try_from_u16(value) {
            size
        } else {
            Self::MAX
        }
    }
}

impl Default for PaletteSize {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PaletteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(size) = *self;
        write!(f, "{size}")
    }
}

impl From<PaletteSize> for u16 {
    #[inline]
    fn from(size: PaletteSize) -> Self {
        size.as_u16()
    }
}

impl TryFrom<u16> for PaletteSize {
    type Error = PaletteSizeFromIntError;

    #[inline]
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::try_from_u16(value).ok_or(PaletteSizeFromIntError(()))
    }
}

impl TryFrom<usize> for PaletteSize {
    type Error = PaletteSizeFromIntError;

    #[inline]
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .ok()
            .and_then(Self::try_from_u16)
            .ok_or(PaletteSizeFromIntError(()))
    }
}

/// The error returned when a [`PaletteBuf`] failed to be created. Includes the
/// [`Vec`] used to try and create the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePaletteBufError<T> {
    /// The provided container holding the palette entries.
    pub entries: Vec<T>,
}

impl<T> fmt::Display for CreatePaletteBufError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "got a palette with length {} which is above the maximum {}",
            self.entries.len(),
            PaletteSize::MAX,
        )
    }
}

impl<T: Debug> Error for CreatePaletteBufError<T> {}

/// An owned palette with at most [`PaletteSize::MAX`] entries.
///
/// Unlike [`PaletteSize`], a [`PaletteBuf`] may be empty: quantizing an empty
/// unique-color list yields an empty palette rather than an error.
///
/// # Examples
///
/// ```
/// # use chromacut::PaletteBuf;
/// # use palette::Srgb;
/// let palette = PaletteBuf::new(vec![Srgb::new(0u8, 0, 0), Srgb::new(255u8, 255, 255)]).unwrap();
/// assert_eq!(palette.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteBuf<T>(Vec<T>);

impl<T> PaletteBuf<T> {
    /// Create a new [`PaletteBuf`] from the given entries.
    ///
    /// # Errors
    ///
    /// Returns an error if there are more entries than [`PaletteSize::MAX`].
    #[inline]
    pub fn new(entries: Vec<T>) -> Result<Self, CreatePaletteBufError<T>> {
        if entries.len() <= PaletteSize::MAX.as_usize() {
            Ok(Self(entries))
        } else {
            Err(CreatePaletteBufError { entries })
        }
    }

    /// Create a new [`PaletteBuf`] without checking the length invariant.
    #[inline]
    pub(crate) fn new_unchecked(entries: Vec<T>) -> Self {
        debug_assert!(entries.len() <= PaletteSize::MAX.as_usize());
        Self(entries)
    }

    /// Returns the number of entries in the palette.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the palette has no entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the palette entries as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns the palette entries as a [`Vec`].
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: ColorComponents<u8, 3>> PaletteBuf<T> {
    /// Sort the palette entries ascending by perceptual [`luminance`].
    ///
    /// The sort is stable, so entries with equal luminance keep the order the
    /// quantizer assigned them and the overall result stays deterministic.
    pub fn sort_by_luminance(&mut self) {
        self.0.sort_by_key(|&color| OrderedFloat(luminance(color)));
    }
}

impl<T> Default for PaletteBuf<T> {
    #[inline]
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for PaletteBuf<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for PaletteBuf<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> Index<usize> for PaletteBuf<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IntoIterator for PaletteBuf<T> {
    type Item = T;

    type IntoIter = alloc::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PaletteBuf<T> {
    type Item = &'a T;

    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> TryFrom<Vec<T>> for PaletteBuf<T> {
    type Error = CreatePaletteBufError<T>;

    #[inline]
    fn try_from(entries: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

/// The perceptual luminance of a color using the standard luma weights,
/// `0.299 * R + 0.587 * G + 0.114 * B`.
///
/// Used to order finished palettes for stable presentation; a pure brightness
/// estimate, not a color space conversion.
///
/// # Examples
///
/// ```
/// # use chromacut::luminance;
/// # use palette::Srgb;
/// assert_eq!(luminance(Srgb::new(0u8, 0, 0)), 0.0);
/// assert_eq!(luminance(Srgb::new(255u8, 255, 255)), 255.0);
/// assert!(luminance(Srgb::new(0u8, 255, 0)) > luminance(Srgb::new(255u8, 0, 0)));
/// ```
#[must_use]
#[inline]
pub fn luminance<Color: ColorComponents<u8, 3>>(color: Color) -> f32 {
    let [r, g, b] = cast::into_array(color).map(f32::from);
    0.299 * r + 0.587 * g + 0.114 * b
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use palette::Srgb;

    #[test]
    fn palette_size_bounds() {
        assert_eq!(PaletteSize::try_from_u16(0), None);
        assert_eq!(PaletteSize::try_from_u16(257), None);
        assert_eq!(PaletteSize::try_from_u16(256), Some(PaletteSize::MAX));
        assert_eq!(PaletteSize::from_u16_clamped(0), PaletteSize::MIN);
        assert_eq!(PaletteSize::from_u16_clamped(300), PaletteSize::MAX);
    }

    #[test]
    fn palette_size_displays_as_plain_number() {
        assert_eq!(PaletteSize::DEFAULT.to_string(), "16");
        assert_eq!(PaletteSize::MAX.to_string(), "256");
    }

    #[test]
    fn oversized_palette_is_rejected() {
        let entries = vec![Srgb::new(0u8, 0, 0); PaletteSize::MAX.as_usize() + 1];
        let err = PaletteBuf::new(entries).unwrap_err();
        assert_eq!(err.entries.len(), 257);
    }

    #[test]
    fn luminance_sort_is_ascending_and_stable() {
        let white = Srgb::new(255u8, 255, 255);
        let black = Srgb::new(0u8, 0, 0);
        // Equal luminance by construction: identical colors.
        let gray_a = Srgb::new(100u8, 100, 100);
        let gray_b = Srgb::new(100u8, 100, 100);

        let mut palette = PaletteBuf::new(vec![white, gray_a, black, gray_b]).unwrap();
        palette.sort_by_luminance();

        assert_eq!(palette.as_slice(), &[black, gray_a, gray_b, white]);
        for pair in palette.as_slice().windows(2) {
            assert!(luminance(pair[0]) <= luminance(pair[1]));
        }
    }

    #[test]
    fn luma_weights_sum_to_full_scale() {
        let lum = luminance(Srgb::new(255u8, 255, 255));
        assert!((lum - 255.0).abs() < 1e-3);
    }
}
