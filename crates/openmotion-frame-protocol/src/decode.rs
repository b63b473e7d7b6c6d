//! Pure helpers mapping raw wire fields into view-native values.

use crate::MAX_TRACKER_COUNT;

/// Whether `bit` is set in the frame-wide button-down bitmask.
pub const fn button_bit_down(bitmask: u32, bit: u32) -> bool {
    (bitmask >> bit) & 1 == 1
}

/// Clamp a wire-sized analog value into the 8-bit range of the view fields.
pub fn clamp_to_u8(value: i32) -> u8 {
    u8::try_from(value.clamp(0, 255)).unwrap_or(0)
}

/// Clamp a claimed tracker count to what the client-side arrays can hold.
pub fn clamp_tracker_count(claimed: i32) -> usize {
    usize::try_from(claimed.max(0))
        .unwrap_or(0)
        .min(MAX_TRACKER_COUNT)
}
