//! Unit quaternion type for controller orientation.

use serde::{Deserialize, Serialize};

/// Orientation quaternion in wxyz order, matching the wire schema.
///
/// The identity rotation is the neutral default used by cleared views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quatf {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quatf {
    pub const IDENTITY: Self = Self {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }
}

impl Default for Quatf {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let q = Quatf::default();
        assert_eq!(q, Quatf::IDENTITY);
        assert!((q.w - 1.0).abs() < f32::EPSILON);
    }
}
