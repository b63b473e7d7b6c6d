//! Device-specific view for the button/stick-only navigation controller.

use openmotion_frame_protocol::{
    BUTTON_BIT_CIRCLE, BUTTON_BIT_CROSS, BUTTON_BIT_DPAD_DOWN, BUTTON_BIT_DPAD_LEFT,
    BUTTON_BIT_DPAD_RIGHT, BUTTON_BIT_DPAD_UP, BUTTON_BIT_L1, BUTTON_BIT_L2, BUTTON_BIT_L3,
    BUTTON_BIT_PS, BUTTON_BIT_TRIGGER, ControllerFrame, FramePayload, button_bit_down, clamp_to_u8,
};
use serde::{Deserialize, Serialize};

use crate::button::ButtonState;

/// Raw stick byte at center detent.
const STICK_CENTER: u8 = 0x80;

/// Debounced, validity-gated state of one navigation controller.
///
/// No pose, sensors, or trackers; the hardware is buttons, one analog
/// trigger, and a thumbstick whose axes are bytes centered at `0x80`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationView {
    is_valid: bool,

    l1: ButtonState,
    l2: ButtonState,
    l3: ButtonState,
    circle: ButtonState,
    cross: ButtonState,
    ps: ButtonState,
    trigger_button: ButtonState,
    dpad_up: ButtonState,
    dpad_right: ButtonState,
    dpad_down: ButtonState,
    dpad_left: ButtonState,

    trigger_value: u8,
    stick_x: u8,
    stick_y: u8,
}

impl Default for NavigationView {
    fn default() -> Self {
        Self {
            is_valid: false,
            l1: ButtonState::Up,
            l2: ButtonState::Up,
            l3: ButtonState::Up,
            circle: ButtonState::Up,
            cross: ButtonState::Up,
            ps: ButtonState::Up,
            trigger_button: ButtonState::Up,
            dpad_up: ButtonState::Up,
            dpad_right: ButtonState::Up,
            dpad_down: ButtonState::Up,
            dpad_left: ButtonState::Up,
            trigger_value: 0,
            stick_x: STICK_CENTER,
            stick_y: STICK_CENTER,
        }
    }
}

impl NavigationView {
    /// Reset every field to its neutral default and drop validity.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fold one decoded frame into the view.
    ///
    /// A disconnected frame (or one carrying another controller type's
    /// payload) clears the view instead.
    pub fn apply_frame(&mut self, frame: &ControllerFrame) {
        if !frame.is_connected {
            self.clear();
            return;
        }
        let FramePayload::Navigation(payload) = &frame.payload else {
            self.clear();
            return;
        };

        let mask = frame.button_down_bitmask;
        self.l1 = self.l1.advance(button_bit_down(mask, BUTTON_BIT_L1));
        self.l2 = self.l2.advance(button_bit_down(mask, BUTTON_BIT_L2));
        self.l3 = self.l3.advance(button_bit_down(mask, BUTTON_BIT_L3));
        self.circle = self.circle.advance(button_bit_down(mask, BUTTON_BIT_CIRCLE));
        self.cross = self.cross.advance(button_bit_down(mask, BUTTON_BIT_CROSS));
        self.ps = self.ps.advance(button_bit_down(mask, BUTTON_BIT_PS));
        self.trigger_button = self
            .trigger_button
            .advance(button_bit_down(mask, BUTTON_BIT_TRIGGER));
        self.dpad_up = self.dpad_up.advance(button_bit_down(mask, BUTTON_BIT_DPAD_UP));
        self.dpad_right = self
            .dpad_right
            .advance(button_bit_down(mask, BUTTON_BIT_DPAD_RIGHT));
        self.dpad_down = self
            .dpad_down
            .advance(button_bit_down(mask, BUTTON_BIT_DPAD_DOWN));
        self.dpad_left = self
            .dpad_left
            .advance(button_bit_down(mask, BUTTON_BIT_DPAD_LEFT));

        self.trigger_value = clamp_to_u8(payload.trigger_value);
        self.stick_x = clamp_to_u8(payload.stick_x);
        self.stick_y = clamp_to_u8(payload.stick_y);

        self.is_valid = true;
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn button_l1(&self) -> ButtonState {
        self.gated_button(self.l1)
    }

    pub fn button_l2(&self) -> ButtonState {
        self.gated_button(self.l2)
    }

    pub fn button_l3(&self) -> ButtonState {
        self.gated_button(self.l3)
    }

    pub fn button_circle(&self) -> ButtonState {
        self.gated_button(self.circle)
    }

    pub fn button_cross(&self) -> ButtonState {
        self.gated_button(self.cross)
    }

    pub fn button_ps(&self) -> ButtonState {
        self.gated_button(self.ps)
    }

    pub fn button_trigger(&self) -> ButtonState {
        self.gated_button(self.trigger_button)
    }

    pub fn button_dpad_up(&self) -> ButtonState {
        self.gated_button(self.dpad_up)
    }

    pub fn button_dpad_right(&self) -> ButtonState {
        self.gated_button(self.dpad_right)
    }

    pub fn button_dpad_down(&self) -> ButtonState {
        self.gated_button(self.dpad_down)
    }

    pub fn button_dpad_left(&self) -> ButtonState {
        self.gated_button(self.dpad_left)
    }

    /// Analog trigger in [0, 1].
    pub fn trigger(&self) -> f32 {
        if self.is_valid {
            f32::from(self.trigger_value) / 255.0
        } else {
            0.0
        }
    }

    /// Stick X axis mapped to roughly [-1, 1]; 0.0 at center detent.
    pub fn stick_x(&self) -> f32 {
        if self.is_valid {
            Self::stick_axis_to_float(self.stick_x)
        } else {
            0.0
        }
    }

    /// Stick Y axis mapped to roughly [-1, 1]; 0.0 at center detent.
    pub fn stick_y(&self) -> f32 {
        if self.is_valid {
            Self::stick_axis_to_float(self.stick_y)
        } else {
            0.0
        }
    }

    fn stick_axis_to_float(raw: u8) -> f32 {
        (f32::from(raw) - f32::from(STICK_CENTER)) / f32::from(STICK_CENTER)
    }

    fn gated_button(&self, state: ButtonState) -> ButtonState {
        if self.is_valid { state } else { ButtonState::Up }
    }
}
