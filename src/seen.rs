//! A membership set over the full 24-bit RGB cube.

use crate::ColorComponents;
use bitvec::vec::BitVec;
use palette::cast;

/// A byte-sized radix.
const RADIX: usize = u8::MAX as usize + 1;

/// A set over all 2^24 possible RGB colors with a combined test-and-mark operation.
///
/// Each distinct `(R, G, B)` triple maps to one bit, so membership checks and
/// inserts are O(1) with no hashing and no growth. The backing bit buffer is
/// allocated once (2 MiB) and [`clear`](ColorSet::clear)ed in place between
/// sampling passes rather than reallocated.
///
/// # Examples
///
/// ```
/// use chromacut::ColorSet;
/// use palette::Srgb;
///
/// let mut seen = ColorSet::new();
/// assert!(!seen.test_and_mark(Srgb::new(12u8, 34, 56)));
/// assert!(seen.test_and_mark(Srgb::new(12u8, 34, 56)));
///
/// seen.clear();
/// assert!(!seen.contains(Srgb::new(12u8, 34, 56)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSet {
    /// One bit per RGB triple, indexed by `r + g * RADIX + b * RADIX * RADIX`.
    bits: BitVec,
}

impl ColorSet {
    /// Create an empty [`ColorSet`], allocating its full bit buffer up front.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bits: BitVec::repeat(false, RADIX * RADIX * RADIX),
        }
    }

    /// The bit index of a color. Always in range for 8-bit channels.
    #[inline]
    fn index<Color: ColorComponents<u8, 3>>(color: Color) -> usize {
        let [r, g, b] = cast::into_array(color).map(usize::from);
        r + g * RADIX + b * RADIX * RADIX
    }

    /// Returns whether `color` was already in the set, marking it as a side effect.
    ///
    /// A single call replaces the usual check-then-insert pair, so a sampling
    /// loop cannot observe the set between the two steps.
    #[inline]
    pub fn test_and_mark<Color: ColorComponents<u8, 3>>(&mut self, color: Color) -> bool {
        self.bits.replace(Self::index(color), true)
    }

    /// Returns whether `color` is in the set, without modifying it.
    #[inline]
    #[must_use]
    pub fn contains<Color: ColorComponents<u8, 3>>(&self, color: Color) -> bool {
        self.bits[Self::index(color)]
    }

    /// Remove all colors from the set, keeping the allocation.
    ///
    /// Must be called before reusing the set for a new image, otherwise stale
    /// bits suppress colors from the new image. Clearing twice is equivalent to
    /// clearing once.
    #[inline]
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Returns whether no color has been marked since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    #[test]
    fn first_mark_returns_false_then_true() {
        let mut seen = ColorSet::new();
        let color = Srgb::new(1u8, 2, 3);
        assert!(!seen.test_and_mark(color));
        assert!(seen.test_and_mark(color));
        assert!(seen.test_and_mark(color));
    }

    #[test]
    fn channels_do_not_alias() {
        // (1, 0, 0), (0, 1, 0), and (0, 0, 1) map to distinct bits.
        let mut seen = ColorSet::new();
        assert!(!seen.test_and_mark(Srgb::new(1u8, 0, 0)));
        assert!(!seen.test_and_mark(Srgb::new(0u8, 1, 0)));
        assert!(!seen.test_and_mark(Srgb::new(0u8, 0, 1)));
    }

    #[test]
    fn extreme_corners_are_in_range() {
        let mut seen = ColorSet::new();
        assert!(!seen.test_and_mark(Srgb::new(0u8, 0, 0)));
        assert!(!seen.test_and_mark(Srgb::new(255u8, 255, 255)));
        assert!(seen.contains(Srgb::new(255u8, 255, 255)));
    }

    #[test]
    fn clear_forgets_previous_pass() {
        let mut seen = ColorSet::new();
        let color = Srgb::new(200u8, 100, 50);
        assert!(!seen.test_and_mark(color));
        seen.clear();
        assert!(!seen.contains(color));
        assert!(!seen.test_and_mark(color));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut seen = ColorSet::new();
        seen.test_and_mark(Srgb::new(9u8, 9, 9));
        seen.clear();
        let once = seen.clone();
        seen.clear();
        assert_eq!(seen, once);
        assert!(seen.is_empty());
    }
}
