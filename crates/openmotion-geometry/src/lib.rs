//! Geometry value types for motion-controller state.
//!
//! Small plain-data vector, quaternion, and pose types shared by the frame
//! protocol and the client-side controller views. Every type has a neutral
//! default (zero vector, identity quaternion, origin pose) so cleared or
//! disconnected state is always representable without sentinels.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod pose;
pub mod quaternion;
pub mod vector;

pub use pose::*;
pub use quaternion::*;
pub use vector::*;
