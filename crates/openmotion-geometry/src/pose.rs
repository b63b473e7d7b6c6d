//! Controller pose: orientation plus position.

use serde::{Deserialize, Serialize};

use crate::quaternion::Quatf;
use crate::vector::Vec3f;

/// A full 6DOF pose. Defaults to identity orientation at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub orientation: Quatf,
    pub position: Vec3f,
}

impl Pose {
    pub const fn new(orientation: Quatf, position: Vec3f) -> Self {
        Self {
            orientation,
            position,
        }
    }

    /// Reset to identity orientation at the origin.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
