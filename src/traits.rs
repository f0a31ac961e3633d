use palette::cast::ArrayCast;

/// Types that may be cast to and from a fixed sized array.
///
/// The sampling and quantization functions in `chromacut` operate over a color
/// type with `N` channels of type `Component`, expressed via [`ArrayCast`].
/// In practice this crate keys everything on 3 `u8` channels, so
/// `palette::Srgb<u8>` (or any other 3×`u8` color) is the expected input.
pub trait ColorComponents<Component, const N: usize>:
    ArrayCast<Array = [Component; N]> + Copy + 'static
{
}

impl<Color, Component, const N: usize> ColorComponents<Component, N> for Color where
    Color: ArrayCast<Array = [Component; N]> + Copy + 'static
{
}
