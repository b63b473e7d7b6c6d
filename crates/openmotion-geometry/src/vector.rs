//! Integer and float vector types.

use serde::{Deserialize, Serialize};

/// 3-vector of `f32`, used for accelerometer/gyroscope readings and positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3f {
    /// The all-zero vector, also the cleared/invalid sentinel for sensor data.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns the unit-length direction and the original magnitude.
    ///
    /// Falls back to `fallback` (with the true, possibly zero, magnitude)
    /// when the vector is too short to normalize.
    pub fn normalized_or(self, fallback: Self) -> (Self, f32) {
        let magnitude = self.length();
        if magnitude > f32::EPSILON {
            let inv = 1.0 / magnitude;
            (
                Self::new(self.x * inv, self.y * inv, self.z * inv),
                magnitude,
            )
        } else {
            (fallback, magnitude)
        }
    }
}

/// 3-vector of `i32`, used for raw magnetometer readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vec3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3i {
    /// The all-zero vector, also the cleared/invalid sentinel for sensor data.
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// 2D screen-space location reported by an optical tracker, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenLocation {
    pub x: f32,
    pub y: f32,
}

impl ScreenLocation {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    #[test]
    fn test_dot_product() {
        let a = Vec3f::new(1.0, 2.0, 3.0);
        let b = Vec3f::new(4.0, -5.0, 6.0);
        assert_close(a.dot(b), 12.0);
    }

    #[test]
    fn test_length() {
        assert_close(Vec3f::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_close(Vec3f::ZERO.length(), 0.0);
    }

    #[test]
    fn test_normalized_or_unit_result() {
        let (dir, mag) = Vec3f::new(0.0, 2.0, 0.0).normalized_or(Vec3f::ZERO);
        assert_close(mag, 2.0);
        assert_close(dir.y, 1.0);
        assert_close(dir.length(), 1.0);
    }

    #[test]
    fn test_normalized_or_zero_falls_back() {
        let (dir, mag) = Vec3f::ZERO.normalized_or(Vec3f::ZERO);
        assert_eq!(dir, Vec3f::ZERO);
        assert_close(mag, 0.0);
    }

    #[test]
    fn test_defaults_are_zero() {
        assert_eq!(Vec3f::default(), Vec3f::ZERO);
        assert_eq!(Vec3i::default(), Vec3i::ZERO);
        assert_eq!(ScreenLocation::default(), ScreenLocation::ZERO);
    }
}
