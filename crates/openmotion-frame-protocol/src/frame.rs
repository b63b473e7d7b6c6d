//! The decoded controller data frame and its type-specific sub-payloads.

use openmotion_geometry::{Pose, Quatf, ScreenLocation, Vec3f, Vec3i};
use serde::{Deserialize, Serialize};

use crate::ids::ControllerKind;
use crate::{ProtocolError, ProtocolResult};

/// Raw inertial/magnetic sensor readings carried by a motion-controller frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawSensorFrame {
    /// Magnetometer reading, device units.
    pub magnetometer: Vec3i,
    /// Accelerometer reading in g.
    pub accelerometer: Vec3f,
    /// Gyroscope reading in rad/s.
    pub gyroscope: Vec3f,
}

impl RawSensorFrame {
    pub const fn new(magnetometer: Vec3i, accelerometer: Vec3f, gyroscope: Vec3f) -> Self {
        Self {
            magnetometer,
            accelerometer,
            gyroscope,
        }
    }
}

/// Optical tracker observations carried by a motion-controller frame.
///
/// Parallel arrays as on the wire: `tracker_ids[i]` saw the controller at
/// `screen_locations[i]`. `valid_count` is the service's claimed count and
/// may exceed both the array lengths and the client's fixed maximum; the
/// view clamps it on apply.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawTrackerFrame {
    pub tracker_ids: Vec<i32>,
    pub screen_locations: Vec<ScreenLocation>,
    pub valid_count: i32,
}

impl RawTrackerFrame {
    /// Build a tracker sub-payload, checking the arrays are parallel.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MismatchedTrackerArrays`] when the id and
    /// location arrays differ in length.
    pub fn new(
        tracker_ids: Vec<i32>,
        screen_locations: Vec<ScreenLocation>,
        valid_count: i32,
    ) -> ProtocolResult<Self> {
        if tracker_ids.len() != screen_locations.len() {
            return Err(ProtocolError::MismatchedTrackerArrays {
                ids: tracker_ids.len(),
                locations: screen_locations.len(),
            });
        }
        Ok(Self {
            tracker_ids,
            screen_locations,
            valid_count,
        })
    }
}

/// Sub-payload for the full 6DOF motion controller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MotionFramePayload {
    pub has_valid_hardware_calibration: bool,
    pub is_tracking_enabled: bool,
    pub is_currently_tracking: bool,
    /// Filtered orientation, wxyz.
    pub orientation: Quatf,
    /// Filtered position, device units.
    pub position: Vec3f,
    /// Absent when the service was not asked to stream raw sensor data.
    pub raw_sensors: Option<RawSensorFrame>,
    /// Absent when the service was not asked to stream tracker projections.
    pub raw_trackers: Option<RawTrackerFrame>,
    /// Analog trigger, wire-sized; clamped to 0..=255 on apply.
    pub trigger_value: i32,
}

impl MotionFramePayload {
    pub fn with_pose(mut self, orientation: Quatf, position: Vec3f) -> Self {
        self.orientation = orientation;
        self.position = position;
        self
    }

    pub fn with_raw_sensors(mut self, sensors: RawSensorFrame) -> Self {
        self.raw_sensors = Some(sensors);
        self
    }

    pub fn with_raw_trackers(mut self, trackers: RawTrackerFrame) -> Self {
        self.raw_trackers = Some(trackers);
        self
    }

    pub fn with_trigger(mut self, trigger_value: i32) -> Self {
        self.trigger_value = trigger_value;
        self
    }

    pub fn with_tracking_flags(mut self, calibrated: bool, enabled: bool, tracking: bool) -> Self {
        self.has_valid_hardware_calibration = calibrated;
        self.is_tracking_enabled = enabled;
        self.is_currently_tracking = tracking;
        self
    }

    /// The pose carried by this payload.
    pub fn pose(&self) -> Pose {
        Pose::new(self.orientation, self.position)
    }
}

/// Sub-payload for the button/stick-only navigation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationFramePayload {
    /// Analog trigger, wire-sized; clamped to 0..=255 on apply.
    pub trigger_value: i32,
    /// Stick X axis, wire-sized byte centered at 0x80.
    pub stick_x: i32,
    /// Stick Y axis, wire-sized byte centered at 0x80.
    pub stick_y: i32,
}

impl Default for NavigationFramePayload {
    fn default() -> Self {
        Self {
            trigger_value: 0,
            stick_x: 0x80,
            stick_y: 0x80,
        }
    }
}

impl NavigationFramePayload {
    pub fn with_trigger(mut self, trigger_value: i32) -> Self {
        self.trigger_value = trigger_value;
        self
    }

    pub fn with_stick(mut self, stick_x: i32, stick_y: i32) -> Self {
        self.stick_x = stick_x;
        self.stick_y = stick_y;
        self
    }
}

/// Controller-type discriminant fused with its type-specific sub-message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FramePayload {
    Motion(MotionFramePayload),
    Navigation(NavigationFramePayload),
}

impl FramePayload {
    pub fn kind(&self) -> ControllerKind {
        match self {
            Self::Motion(_) => ControllerKind::Motion,
            Self::Navigation(_) => ControllerKind::Navigation,
        }
    }
}

/// One periodic snapshot of a controller's full state, as delivered by the
/// transport after deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerFrame {
    /// Stable id the service routes frames by.
    pub controller_id: i32,
    /// Monotonically increasing per-controller frame counter.
    pub sequence_num: i32,
    /// False when the physical device dropped off the bus.
    pub is_connected: bool,
    /// Frame-wide button-down bitmask, one bit per logical button.
    pub button_down_bitmask: u32,
    pub payload: FramePayload,
}

impl ControllerFrame {
    pub fn new(controller_id: i32, sequence_num: i32, payload: FramePayload) -> Self {
        Self {
            controller_id,
            sequence_num,
            is_connected: true,
            button_down_bitmask: 0,
            payload,
        }
    }

    /// A connected motion-controller frame with a default payload.
    pub fn motion(controller_id: i32, sequence_num: i32) -> Self {
        Self::new(
            controller_id,
            sequence_num,
            FramePayload::Motion(MotionFramePayload::default()),
        )
    }

    /// A connected navigation-controller frame with a default payload.
    pub fn navigation(controller_id: i32, sequence_num: i32) -> Self {
        Self::new(
            controller_id,
            sequence_num,
            FramePayload::Navigation(NavigationFramePayload::default()),
        )
    }

    pub fn with_buttons(mut self, button_down_bitmask: u32) -> Self {
        self.button_down_bitmask = button_down_bitmask;
        self
    }

    pub fn with_connected(mut self, is_connected: bool) -> Self {
        self.is_connected = is_connected;
        self
    }

    pub fn with_payload(mut self, payload: FramePayload) -> Self {
        self.payload = payload;
        self
    }

    /// The controller family this frame belongs to.
    pub fn kind(&self) -> ControllerKind {
        self.payload.kind()
    }
}
