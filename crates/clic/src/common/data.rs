//! Bus word type and width helpers.

use super::constants::BUS_WIDTH;

/// A value carried on the shared data bus.
///
/// Narrower registers occupy the low bits; the upper bits are zero on read
/// and discarded on write.
pub type Word = u32;

/// Returns the mask covering the low `width` bits of a bus word.
///
/// Widths of 32 or more yield an all-ones mask, a width of zero yields zero.
#[inline]
pub const fn width_mask(width: u32) -> Word {
    if width >= BUS_WIDTH {
        Word::MAX
    } else {
        (1 << width) - 1
    }
}

/// Returns the number of address units (bytes) one word of `width` bits occupies.
#[inline]
pub const fn width_bytes(width: u32) -> u32 {
    width.div_ceil(8)
}
