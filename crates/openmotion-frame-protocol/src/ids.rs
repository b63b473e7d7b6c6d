//! Protocol constants: controller kinds and button bit positions.

use serde::{Deserialize, Serialize};

use crate::{ProtocolError, ProtocolResult};

/// Wire discriminant for the full 6DOF motion controller.
pub const CONTROLLER_TYPE_MOTION: i32 = 0;
/// Wire discriminant for the button/stick-only navigation controller.
pub const CONTROLLER_TYPE_NAVIGATION: i32 = 1;

/// Bit positions of the frame-wide button-down bitmask.
///
/// Fixed by the wire schema's button enumeration; a button is down when
/// `(bitmask >> bit) & 1 == 1`.
pub const BUTTON_BIT_TRIANGLE: u32 = 0;
pub const BUTTON_BIT_CIRCLE: u32 = 1;
pub const BUTTON_BIT_CROSS: u32 = 2;
pub const BUTTON_BIT_SQUARE: u32 = 3;
pub const BUTTON_BIT_SELECT: u32 = 4;
pub const BUTTON_BIT_START: u32 = 5;
pub const BUTTON_BIT_PS: u32 = 6;
pub const BUTTON_BIT_MOVE: u32 = 7;
pub const BUTTON_BIT_TRIGGER: u32 = 8;
pub const BUTTON_BIT_L1: u32 = 9;
pub const BUTTON_BIT_L2: u32 = 10;
pub const BUTTON_BIT_L3: u32 = 11;
pub const BUTTON_BIT_DPAD_UP: u32 = 12;
pub const BUTTON_BIT_DPAD_RIGHT: u32 = 13;
pub const BUTTON_BIT_DPAD_DOWN: u32 = 14;
pub const BUTTON_BIT_DPAD_LEFT: u32 = 15;

/// The physical controller family a frame (or a bound view) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerKind {
    Motion,
    Navigation,
}

impl ControllerKind {
    /// Validate a raw wire discriminant.
    ///
    /// This is the single place an unknown controller type can surface; an
    /// unrecognized value means schema drift between service and client.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnknownControllerType`] for any discriminant
    /// outside the closed schema.
    pub fn from_wire(discriminant: i32) -> ProtocolResult<Self> {
        match discriminant {
            CONTROLLER_TYPE_MOTION => Ok(Self::Motion),
            CONTROLLER_TYPE_NAVIGATION => Ok(Self::Navigation),
            other => Err(ProtocolError::UnknownControllerType(other)),
        }
    }

    /// The wire discriminant for this kind.
    pub const fn to_wire(self) -> i32 {
        match self {
            Self::Motion => CONTROLLER_TYPE_MOTION,
            Self::Navigation => CONTROLLER_TYPE_NAVIGATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_discriminants_round_trip() {
        assert_eq!(
            ControllerKind::from_wire(CONTROLLER_TYPE_MOTION),
            Ok(ControllerKind::Motion)
        );
        assert_eq!(
            ControllerKind::from_wire(CONTROLLER_TYPE_NAVIGATION),
            Ok(ControllerKind::Navigation)
        );
        assert_eq!(ControllerKind::Motion.to_wire(), CONTROLLER_TYPE_MOTION);
        assert_eq!(
            ControllerKind::Navigation.to_wire(),
            CONTROLLER_TYPE_NAVIGATION
        );
    }

    #[test]
    fn test_unknown_discriminant_is_rejected() {
        assert_eq!(
            ControllerKind::from_wire(42),
            Err(ProtocolError::UnknownControllerType(42))
        );
        assert_eq!(
            ControllerKind::from_wire(-1),
            Err(ProtocolError::UnknownControllerType(-1))
        );
    }

    #[test]
    fn test_button_bits_are_distinct() {
        let bits = [
            BUTTON_BIT_TRIANGLE,
            BUTTON_BIT_CIRCLE,
            BUTTON_BIT_CROSS,
            BUTTON_BIT_SQUARE,
            BUTTON_BIT_SELECT,
            BUTTON_BIT_START,
            BUTTON_BIT_PS,
            BUTTON_BIT_MOVE,
            BUTTON_BIT_TRIGGER,
            BUTTON_BIT_L1,
            BUTTON_BIT_L2,
            BUTTON_BIT_L3,
            BUTTON_BIT_DPAD_UP,
            BUTTON_BIT_DPAD_RIGHT,
            BUTTON_BIT_DPAD_DOWN,
            BUTTON_BIT_DPAD_LEFT,
        ];
        for (i, a) in bits.iter().enumerate() {
            for b in bits.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
