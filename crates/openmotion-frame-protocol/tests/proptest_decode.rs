//! Property-based tests for the decode helpers and wire discriminants.

use openmotion_frame_protocol::{
    CONTROLLER_TYPE_MOTION, CONTROLLER_TYPE_NAVIGATION, ControllerKind, MAX_TRACKER_COUNT,
    button_bit_down, clamp_to_u8, clamp_tracker_count,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(500))]

    /// clamp_to_u8 is the identity on 0..=255 and saturates outside it.
    #[test]
    fn prop_clamp_to_u8(value: i32) {
        let clamped = clamp_to_u8(value);
        if (0..=255).contains(&value) {
            prop_assert_eq!(i32::from(clamped), value);
        } else if value < 0 {
            prop_assert_eq!(clamped, 0);
        } else {
            prop_assert_eq!(clamped, 255);
        }
    }

    /// Tracker counts clamp into 0..=MAX_TRACKER_COUNT and are the identity
    /// inside that range.
    #[test]
    fn prop_clamp_tracker_count(claimed: i32) {
        let clamped = clamp_tracker_count(claimed);
        prop_assert!(clamped <= MAX_TRACKER_COUNT);
        if let Ok(claimed_usize) = usize::try_from(claimed) {
            if claimed_usize <= MAX_TRACKER_COUNT {
                prop_assert_eq!(clamped, claimed_usize);
            }
        }
    }

    /// Exactly the set bits of the bitmask read as down.
    #[test]
    fn prop_button_bit_down_matches_mask(bitmask: u32, bit in 0u32..32) {
        prop_assert_eq!(button_bit_down(bitmask, bit), bitmask & (1 << bit) != 0);
    }

    /// Wire discriminant validation accepts exactly the closed schema and
    /// round-trips through to_wire.
    #[test]
    fn prop_controller_kind_round_trip(discriminant: i32) {
        match ControllerKind::from_wire(discriminant) {
            Ok(kind) => {
                prop_assert!(
                    discriminant == CONTROLLER_TYPE_MOTION
                        || discriminant == CONTROLLER_TYPE_NAVIGATION
                );
                prop_assert_eq!(kind.to_wire(), discriminant);
            }
            Err(_) => {
                prop_assert!(
                    discriminant != CONTROLLER_TYPE_MOTION
                        && discriminant != CONTROLLER_TYPE_NAVIGATION
                );
            }
        }
    }
}
