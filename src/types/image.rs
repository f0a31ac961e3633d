use crate::MAX_PIXELS;
use alloc::vec::Vec;
use core::{
    error::Error,
    fmt::{self, Debug},
    marker::PhantomData,
};

/// The error returned when an [`Image`] failed to be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateImageError {
    /// The provided image width.
    width: u32,
    /// The provided image height.
    height: u32,
    /// The length of the pixel buffer.
    length: usize,
}

impl fmt::Display for CreateImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { width, height, length } = *self;
        if width.checked_mul(height).is_some() {
            write!(
                f,
                "image dimensions of ({width}, {height}) do not match the buffer length of {length}"
            )
        } else {
            write!(
                f,
                "image dimensions of ({width}, {height}) are above the maximum number of pixels of {MAX_PIXELS}",
            )
        }
    }
}

impl Error for CreateImageError {}

/// The error returned when an [`Image`] failed to be created. Includes the pixel buffer used to try
/// and create the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateImageBufError<T> {
    /// The underlying error/reason.
    pub error: CreateImageError,
    /// The provided container holding the pixels of the image.
    pub buffer: T,
}

impl<T> fmt::Display for CreateImageBufError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T: Debug> Error for CreateImageBufError<T> {}

/// The base image type parameterized by the type of the container.
///
/// Typically you want to use one of the image types with a defined container:
/// - [`ImageBuf`]: an owned image backed by a [`Vec`].
/// - [`ImageRef`]: a borrowed image backed by an immutable slice reference.
#[derive(Clone, Copy, Debug)]
pub struct Image<Color, Container> {
    /// The color type stored in `pixels`.
    color: PhantomData<Color>,
    /// The width of the image.
    width: u32,
    /// The height of the image.
    height: u32,
    /// The pixel buffer or slice.
    pixels: Container,
}

/// An owned image buffer backed by a [`Vec`].
///
/// This type consists of a width, a height, and a pixel buffer in row-major order.
/// The length of the pixel [`Vec`] is guaranteed to match `width * height` and be
/// less than or equal to [`MAX_PIXELS`].
///
/// # Examples
///
/// ```
/// # use chromacut::{ImageBuf, CreateImageBufError};
/// # use palette::Srgb;
/// # fn main() -> Result<(), CreateImageBufError<Vec<Srgb<u8>>>> {
/// let (width, height) = (64, 64);
/// let pixels = vec![Srgb::new(0u8, 0, 0); (width * height) as usize];
/// let image = ImageBuf::new(width, height, pixels)?;
/// # Ok(())
/// # }
/// ```
pub type ImageBuf<Color> = Image<Color, Vec<Color>>;

/// A borrowed image backed by a reference to a slice.
///
/// This type consists of a width, a height, and a pixel slice in row-major order.
/// The length of the pixel slice is guaranteed to match `width * height` and be
/// less than or equal to [`MAX_PIXELS`].
///
/// This guarantee is what lets the sampler draw random flat pixel indices
/// without per-draw bounds failures: any in-range index is a valid pixel.
///
/// # Examples
///
/// ```
/// # use chromacut::ImageRef;
/// # use palette::Srgb;
/// let (width, height) = (64, 64);
/// let pixels = vec![Srgb::new(0u8, 0, 0); (width * height) as usize];
/// let image = ImageRef::new(width, height, &pixels).unwrap();
/// ```
pub type ImageRef<'a, Color> = Image<Color, &'a [Color]>;

impl<Color, Container> Image<Color, Container> {
    /// Returns the width and height of the [`Image`].
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the width of the [`Image`].
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the [`Image`].
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl<Color, Container: AsRef<[Color]>> Image<Color, Container> {
    /// Create a new [`Image`], validating that the pixel count matches the dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if `width * height` overflows a `u32` or does not equal
    /// the length of `pixels`.
    pub fn new(
        width: u32,
        height: u32,
        pixels: Container,
    ) -> Result<Self, CreateImageBufError<Container>> {
        match width.checked_mul(height) {
            Some(len) if len as usize == pixels.as_ref().len() => Ok(Self {
                color: PhantomData,
                width,
                height,
                pixels,
            }),
            _ => Err(CreateImageBufError {
                error: CreateImageError {
                    width,
                    height,
                    length: pixels.as_ref().len(),
                },
                buffer: pixels,
            }),
        }
    }

    /// Returns the number of pixels in the [`Image`].
    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    pub fn num_pixels(&self) -> u32 {
        // width * height <= MAX_PIXELS is validated on construction
        self.pixels.as_ref().len() as u32
    }

    /// Returns whether the [`Image`] has zero pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.as_ref().is_empty()
    }

    /// Returns the pixels of the [`Image`] as a slice in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[Color] {
        self.pixels.as_ref()
    }

    /// Create an [`ImageRef`] borrowing from this [`Image`].
    #[inline]
    pub fn as_ref(&self) -> ImageRef<'_, Color> {
        Image {
            color: PhantomData,
            width: self.width,
            height: self.height,
            pixels: self.pixels.as_ref(),
        }
    }
}

impl<Color> ImageBuf<Color> {
    /// Returns the pixel buffer of an [`ImageBuf`].
    #[inline]
    pub fn into_vec(self) -> Vec<Color> {
        self.pixels
    }
}

impl<Color> Default for ImageRef<'_, Color> {
    fn default() -> Self {
        Self {
            color: PhantomData,
            width: 0,
            height: 0,
            pixels: &[],
        }
    }
}

impl<Color> Default for ImageBuf<Color> {
    fn default() -> Self {
        Self {
            color: PhantomData,
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }
}

#[cfg(feature = "image")]
mod image_integration {
    use super::*;
    use palette::{Srgb, cast};

    impl<'a> TryFrom<&'a image::RgbImage> for ImageRef<'a, Srgb<u8>> {
        type Error = CreateImageError;

        fn try_from(image: &'a image::RgbImage) -> Result<Self, Self::Error> {
            let (width, height) = image.dimensions();
            let pixels = cast::from_component_slice(image.as_raw());
            Image::new(width, height, pixels).map_err(|err| err.error)
        }
    }

    impl TryFrom<image::RgbImage> for ImageBuf<Srgb<u8>> {
        type Error = CreateImageError;

        fn try_from(image: image::RgbImage) -> Result<Self, Self::Error> {
            let (width, height) = image.dimensions();
            let pixels = cast::from_component_slice::<Srgb<u8>>(image.as_raw()).to_vec();
            Image::new(width, height, pixels).map_err(|err| err.error)
        }
    }
}
