//! Device-specific view for the full 6DOF motion controller.

use openmotion_frame_protocol::{
    BUTTON_BIT_CIRCLE, BUTTON_BIT_CROSS, BUTTON_BIT_MOVE, BUTTON_BIT_PS, BUTTON_BIT_SELECT,
    BUTTON_BIT_SQUARE, BUTTON_BIT_START, BUTTON_BIT_TRIANGLE, BUTTON_BIT_TRIGGER, ControllerFrame,
    FramePayload, button_bit_down, clamp_to_u8,
};
use openmotion_geometry::{Pose, Quatf, ScreenLocation, Vec3f};
use serde::{Deserialize, Serialize};

use crate::button::ButtonState;
use crate::raw_data::{RawSensorData, RawTrackerData};

/// Gravity direction when the controller rests upright in its cradle.
const GRAVITY_CALIBRATION_DIRECTION: Vec3f = Vec3f::new(0.0, 1.0, 0.0);

/// cos(10°); alignment cone half-angle for the at-rest heuristic.
const COSINE_10_DEGREES: f32 = 0.984_808;

/// Accelerometer magnitude tolerance around 1 g for the at-rest heuristic.
const GRAVITY_MAGNITUDE_TOLERANCE: f32 = 0.1;

/// Debounced, validity-gated state of one motion controller.
///
/// Every accessor short-circuits to its neutral default while the view is
/// invalid (never updated, or last seen disconnected), so consumers cannot
/// observe stale pose or button data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MotionView {
    is_valid: bool,
    has_valid_hardware_calibration: bool,
    is_tracking_enabled: bool,
    is_currently_tracking: bool,

    pose: Pose,
    raw_sensors: RawSensorData,
    raw_trackers: RawTrackerData,

    triangle: ButtonState,
    circle: ButtonState,
    cross: ButtonState,
    square: ButtonState,
    select: ButtonState,
    start: ButtonState,
    ps: ButtonState,
    move_button: ButtonState,
    trigger_button: ButtonState,

    trigger_value: u8,

    current_rumble: u8,
    requested_rumble: u8,
}

impl MotionView {
    /// Reset every field to its neutral default and drop validity.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fold one decoded frame into the view.
    ///
    /// A disconnected frame (or one carrying another controller type's
    /// payload) clears the view instead. Malformed field values cannot abort
    /// the application: analog bytes are clamped and unknown bitmask bits are
    /// simply never sampled.
    pub fn apply_frame(&mut self, frame: &ControllerFrame) {
        if !frame.is_connected {
            self.clear();
            return;
        }
        let FramePayload::Motion(payload) = &frame.payload else {
            self.clear();
            return;
        };

        self.has_valid_hardware_calibration = payload.has_valid_hardware_calibration;
        self.is_tracking_enabled = payload.is_tracking_enabled;
        self.is_currently_tracking = payload.is_currently_tracking;
        self.pose = payload.pose();

        match &payload.raw_sensors {
            Some(sensors) => self.raw_sensors.apply(sensors),
            None => self.raw_sensors.clear(),
        }
        match &payload.raw_trackers {
            Some(trackers) => self.raw_trackers.apply(trackers),
            None => self.raw_trackers.clear(),
        }

        let mask = frame.button_down_bitmask;
        self.triangle = self.triangle.advance(button_bit_down(mask, BUTTON_BIT_TRIANGLE));
        self.circle = self.circle.advance(button_bit_down(mask, BUTTON_BIT_CIRCLE));
        self.cross = self.cross.advance(button_bit_down(mask, BUTTON_BIT_CROSS));
        self.square = self.square.advance(button_bit_down(mask, BUTTON_BIT_SQUARE));
        self.select = self.select.advance(button_bit_down(mask, BUTTON_BIT_SELECT));
        self.start = self.start.advance(button_bit_down(mask, BUTTON_BIT_START));
        self.ps = self.ps.advance(button_bit_down(mask, BUTTON_BIT_PS));
        self.move_button = self.move_button.advance(button_bit_down(mask, BUTTON_BIT_MOVE));
        self.trigger_button = self
            .trigger_button
            .advance(button_bit_down(mask, BUTTON_BIT_TRIGGER));

        self.trigger_value = clamp_to_u8(payload.trigger_value);

        self.is_valid = true;
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn has_valid_hardware_calibration(&self) -> bool {
        self.is_valid && self.has_valid_hardware_calibration
    }

    pub fn is_tracking_enabled(&self) -> bool {
        self.is_valid && self.is_tracking_enabled
    }

    pub fn is_currently_tracking(&self) -> bool {
        self.is_valid && self.is_currently_tracking
    }

    pub fn pose(&self) -> Pose {
        if self.is_valid { self.pose } else { Pose::default() }
    }

    pub fn orientation(&self) -> Quatf {
        self.pose().orientation
    }

    pub fn position(&self) -> Vec3f {
        self.pose().position
    }

    pub fn raw_sensor_data(&self) -> RawSensorData {
        if self.is_valid {
            self.raw_sensors
        } else {
            RawSensorData::default()
        }
    }

    pub fn raw_tracker_data(&self) -> RawTrackerData {
        if self.is_valid {
            self.raw_trackers
        } else {
            RawTrackerData::default()
        }
    }

    /// Where `tracker_id` saw the controller this frame, if it did.
    pub fn location_for_tracker_id(&self, tracker_id: i32) -> Option<ScreenLocation> {
        self.raw_tracker_data().location_for_tracker_id(tracker_id)
    }

    pub fn button_triangle(&self) -> ButtonState {
        self.gated_button(self.triangle)
    }

    pub fn button_circle(&self) -> ButtonState {
        self.gated_button(self.circle)
    }

    pub fn button_cross(&self) -> ButtonState {
        self.gated_button(self.cross)
    }

    pub fn button_square(&self) -> ButtonState {
        self.gated_button(self.square)
    }

    pub fn button_select(&self) -> ButtonState {
        self.gated_button(self.select)
    }

    pub fn button_start(&self) -> ButtonState {
        self.gated_button(self.start)
    }

    pub fn button_ps(&self) -> ButtonState {
        self.gated_button(self.ps)
    }

    pub fn button_move(&self) -> ButtonState {
        self.gated_button(self.move_button)
    }

    pub fn button_trigger(&self) -> ButtonState {
        self.gated_button(self.trigger_button)
    }

    /// Analog trigger in [0, 1].
    pub fn trigger(&self) -> f32 {
        if self.is_valid {
            f32::from(self.trigger_value) / 255.0
        } else {
            0.0
        }
    }

    /// Rumble intensity the device is currently running, 0–255.
    pub fn current_rumble(&self) -> u8 {
        if self.is_valid { self.current_rumble } else { 0 }
    }

    /// Rumble intensity requested but not yet acknowledged, 0–255.
    pub fn requested_rumble(&self) -> u8 {
        if self.is_valid { self.requested_rumble } else { 0 }
    }

    /// The gravity direction expected while the controller sits in its cradle.
    pub fn gravity_calibration_direction(&self) -> Vec3f {
        GRAVITY_CALIBRATION_DIRECTION
    }

    /// Heuristic "at rest in the known cradle orientation" test.
    ///
    /// True when the accelerometer magnitude is within ±0.1 g of 1 g and its
    /// direction lies within 10° of the cradle gravity direction. Consumers
    /// use this to gate calibration; no calibration happens here.
    pub fn is_stable_and_aligned_with_gravity(&self) -> bool {
        let (direction, magnitude) = self
            .raw_sensors
            .accelerometer
            .normalized_or(Vec3f::ZERO);

        (1.0 - magnitude).abs() <= GRAVITY_MAGNITUDE_TOLERANCE
            && GRAVITY_CALIBRATION_DIRECTION.dot(direction) >= COSINE_10_DEGREES
    }

    fn gated_button(&self, state: ButtonState) -> ButtonState {
        if self.is_valid { state } else { ButtonState::Up }
    }
}
