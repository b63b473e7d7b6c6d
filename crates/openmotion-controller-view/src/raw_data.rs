//! View-side raw sensor and tracker state.
//!
//! These are the client's fixed-size copies of the optional raw-data
//! sub-payloads. All-zero (and tracker id `-1`) is the cleared sentinel; a
//! frame that carries no raw data resets them rather than leaving stale
//! readings visible.

use openmotion_frame_protocol::{MAX_TRACKER_COUNT, RawSensorFrame, RawTrackerFrame, clamp_tracker_count};
use openmotion_geometry::{ScreenLocation, Vec3f, Vec3i};
use serde::{Deserialize, Serialize};

/// Latest raw inertial/magnetic readings from a motion controller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawSensorData {
    pub magnetometer: Vec3i,
    pub accelerometer: Vec3f,
    pub gyroscope: Vec3f,
}

impl RawSensorData {
    /// Reset to the all-zero sentinel.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn apply(&mut self, frame: &RawSensorFrame) {
        self.magnetometer = frame.magnetometer;
        self.accelerometer = frame.accelerometer;
        self.gyroscope = frame.gyroscope;
    }
}

/// Latest optical-tracker projections of a motion controller.
///
/// Parallel fixed arrays; only the first `valid_count` entries are
/// meaningful. Unused id slots hold `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawTrackerData {
    tracker_ids: [i32; MAX_TRACKER_COUNT],
    screen_locations: [ScreenLocation; MAX_TRACKER_COUNT],
    valid_count: usize,
}

impl Default for RawTrackerData {
    fn default() -> Self {
        Self {
            tracker_ids: [-1; MAX_TRACKER_COUNT],
            screen_locations: [ScreenLocation::ZERO; MAX_TRACKER_COUNT],
            valid_count: 0,
        }
    }
}

impl RawTrackerData {
    /// Reset to the empty sentinel.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// How many tracker entries are populated this frame.
    pub fn valid_count(&self) -> usize {
        self.valid_count
    }

    /// Iterate the populated (tracker id, screen location) pairs.
    pub fn entries(&self) -> impl Iterator<Item = (i32, ScreenLocation)> + '_ {
        self.tracker_ids
            .iter()
            .copied()
            .zip(self.screen_locations.iter().copied())
            .take(self.valid_count)
    }

    /// Where `tracker_id` saw the controller this frame, if it did.
    ///
    /// Scans only the valid prefix; first match wins.
    pub fn location_for_tracker_id(&self, tracker_id: i32) -> Option<ScreenLocation> {
        self.entries()
            .find(|(id, _)| *id == tracker_id)
            .map(|(_, location)| location)
    }

    pub(crate) fn apply(&mut self, frame: &RawTrackerFrame) {
        self.clear();

        let count = clamp_tracker_count(frame.valid_count)
            .min(frame.tracker_ids.len())
            .min(frame.screen_locations.len());
        let src = frame
            .tracker_ids
            .iter()
            .zip(frame.screen_locations.iter())
            .take(count);
        let dst = self
            .tracker_ids
            .iter_mut()
            .zip(self.screen_locations.iter_mut());
        for ((src_id, src_location), (dst_id, dst_location)) in src.zip(dst) {
            *dst_id = *src_id;
            *dst_location = *src_location;
        }
        self.valid_count = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tracker_frame() -> RawTrackerFrame {
        RawTrackerFrame {
            tracker_ids: vec![7, 3],
            screen_locations: vec![
                ScreenLocation::new(10.0, 20.0),
                ScreenLocation::new(30.0, 40.0),
            ],
            valid_count: 2,
        }
    }

    #[test]
    fn test_lookup_hits_valid_prefix() {
        let mut data = RawTrackerData::default();
        data.apply(&two_tracker_frame());

        assert_eq!(data.valid_count(), 2);
        assert_eq!(
            data.location_for_tracker_id(3),
            Some(ScreenLocation::new(30.0, 40.0))
        );
        assert_eq!(
            data.location_for_tracker_id(7),
            Some(ScreenLocation::new(10.0, 20.0))
        );
        assert_eq!(data.location_for_tracker_id(9), None);
    }

    #[test]
    fn test_lookup_ignores_entries_past_valid_count() {
        let mut frame = two_tracker_frame();
        frame.valid_count = 1;

        let mut data = RawTrackerData::default();
        data.apply(&frame);

        assert_eq!(data.valid_count(), 1);
        assert_eq!(
            data.location_for_tracker_id(7),
            Some(ScreenLocation::new(10.0, 20.0))
        );
        assert_eq!(data.location_for_tracker_id(3), None);
    }

    #[test]
    fn test_apply_clamps_oversized_claims() {
        let mut frame = two_tracker_frame();
        frame.valid_count = 99;

        let mut data = RawTrackerData::default();
        data.apply(&frame);
        assert_eq!(data.valid_count(), MAX_TRACKER_COUNT);
    }

    #[test]
    fn test_apply_clamps_to_actual_array_length() {
        let frame = RawTrackerFrame {
            tracker_ids: vec![5],
            screen_locations: vec![ScreenLocation::new(1.0, 2.0)],
            valid_count: 2,
        };

        let mut data = RawTrackerData::default();
        data.apply(&frame);
        assert_eq!(data.valid_count(), 1);
        assert_eq!(
            data.location_for_tracker_id(5),
            Some(ScreenLocation::new(1.0, 2.0))
        );
    }

    #[test]
    fn test_clear_resets_sentinels() {
        let mut data = RawTrackerData::default();
        data.apply(&two_tracker_frame());
        data.clear();

        assert_eq!(data.valid_count(), 0);
        assert_eq!(data.location_for_tracker_id(7), None);
        assert_eq!(data, RawTrackerData::default());
    }

    #[test]
    fn test_sensor_data_apply_and_clear() {
        let mut data = RawSensorData::default();
        data.apply(&RawSensorFrame::new(
            Vec3i::new(1, 2, 3),
            Vec3f::new(0.0, 1.0, 0.0),
            Vec3f::new(0.1, 0.2, 0.3),
        ));
        assert_eq!(data.magnetometer, Vec3i::new(1, 2, 3));

        data.clear();
        assert_eq!(data, RawSensorData::default());
        assert_eq!(data.accelerometer, Vec3f::ZERO);
    }
}
