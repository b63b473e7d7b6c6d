//! Decoded device-state frame model for motion controllers.
//!
//! This crate defines the already-deserialized frame a transport hands to the
//! client view layer: connectivity, monotonic sequence number, a frame-wide
//! button bitmask, and a controller-type-specific sub-payload. It performs no
//! socket I/O and knows nothing about the wire encoding beyond the field set
//! and the fixed button bit positions of the schema.
//!
//! The controller-type discriminant and its sub-message are fused into one
//! enum ([`FramePayload`]) so a frame can never declare one controller type
//! while carrying another type's data. Raw wire integers are validated once,
//! at [`ControllerKind::from_wire`]; everything past that boundary is total.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod decode;
pub mod frame;
pub mod ids;

pub use decode::*;
pub use frame::*;
pub use ids::*;

use thiserror::Error;

/// Errors returned by frame-model operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Unknown controller type discriminant: {0}")]
    UnknownControllerType(i32),

    #[error("Tracker arrays are not parallel: {ids} ids vs {locations} locations")]
    MismatchedTrackerArrays { ids: usize, locations: usize },
}

/// Convenience result alias for frame-model operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Maximum number of optical trackers a frame can report locations for.
///
/// Wire frames claiming more valid entries than this are clamped on apply.
pub const MAX_TRACKER_COUNT: usize = 2;
