//! Per-button debounced edge-state machine.

use serde::{Deserialize, Serialize};

/// Edge-aware encoding of a raw button bit across frames.
///
/// Bit 0 of the discriminant is "currently down", so the raw level can be
/// recovered from the state value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ButtonState {
    /// Not pressed. (00b)
    #[default]
    Up = 0b00,
    /// Down for one frame only. (01b)
    Pressed = 0b01,
    /// Down for more than one frame. (11b)
    Down = 0b11,
    /// Up for one frame only. (10b)
    Released = 0b10,
}

impl ButtonState {
    /// Advance one frame given the button's current raw bit.
    ///
    /// Total over the whole (state, bit) domain; transitions follow the
    /// cycle Up → Pressed → Down → Released → Up.
    #[must_use]
    pub const fn advance(self, is_down: bool) -> Self {
        match (self, is_down) {
            (Self::Up | Self::Released, true) => Self::Pressed,
            (Self::Up | Self::Released, false) => Self::Up,
            (Self::Pressed | Self::Down, true) => Self::Down,
            (Self::Pressed | Self::Down, false) => Self::Released,
        }
    }

    /// The button is physically held this frame.
    pub const fn is_down(self) -> bool {
        matches!(self, Self::Pressed | Self::Down)
    }

    /// The button went down on this frame.
    pub const fn just_pressed(self) -> bool {
        matches!(self, Self::Pressed)
    }

    /// The button came up on this frame.
    pub const fn just_released(self) -> bool {
        matches!(self, Self::Released)
    }
}

#[cfg(test)]
mod tests {
    use super::ButtonState::{Down, Pressed, Released, Up};
    use super::*;

    #[test]
    fn test_transition_table() {
        assert_eq!(Up.advance(true), Pressed);
        assert_eq!(Up.advance(false), Up);
        assert_eq!(Pressed.advance(true), Down);
        assert_eq!(Pressed.advance(false), Released);
        assert_eq!(Down.advance(true), Down);
        assert_eq!(Down.advance(false), Released);
        assert_eq!(Released.advance(true), Pressed);
        assert_eq!(Released.advance(false), Up);
    }

    #[test]
    fn test_held_input_settles_on_down() {
        let mut state = Up;
        let mut seen = Vec::new();
        for _ in 0..4 {
            state = state.advance(true);
            seen.push(state);
        }
        assert_eq!(seen, vec![Pressed, Down, Down, Down]);
    }

    #[test]
    fn test_release_from_down_settles_on_up() {
        let mut state = Down;
        let mut seen = Vec::new();
        for _ in 0..3 {
            state = state.advance(false);
            seen.push(state);
        }
        assert_eq!(seen, vec![Released, Up, Up]);
    }

    #[test]
    fn test_discriminant_bit_zero_is_down_level() {
        for state in [Up, Pressed, Down, Released] {
            assert_eq!((state as u8) & 1 == 1, state.is_down());
        }
    }

    #[test]
    fn test_edge_predicates() {
        assert!(Pressed.just_pressed());
        assert!(!Down.just_pressed());
        assert!(Released.just_released());
        assert!(!Up.just_released());
    }
}
