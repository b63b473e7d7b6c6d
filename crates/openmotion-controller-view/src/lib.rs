//! Client-side view of motion-controller state.
//!
//! The transport layer hands this crate already-decoded
//! [`ControllerFrame`](openmotion_frame_protocol::ControllerFrame)s; a
//! [`ControllerView`] per controller id turns that stream into a debounced,
//! ordered, stale-tolerant snapshot:
//!
//! - frames are applied strictly in sequence-number order, duplicates and
//!   reordered deliveries are silently dropped;
//! - the frame-wide button bitmask is run through a per-button edge-state
//!   machine ([`ButtonState`]) so consumers can distinguish "just pressed"
//!   from "held";
//! - an exponentially smoothed frames-per-second estimate is maintained from
//!   the physical arrival times;
//! - all accessors are gated on a per-view validity flag, so a disconnected
//!   or never-updated controller always reads as neutral defaults, never as
//!   stale data.
//!
//! # Concurrency
//!
//! Single writer, many readers: exactly one execution context (the
//! transport's receive path) calls `apply_frame`; accessors are read-only.
//! Nothing here blocks or allocates per frame, and no locking is provided —
//! callers that share a view across threads must serialize each full
//! `apply_frame` behind their own visibility boundary so readers never see a
//! half-applied frame.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod button;
pub mod controller;
pub mod motion;
pub mod navigation;
pub mod rate;
pub mod raw_data;

pub use button::*;
pub use controller::*;
pub use motion::*;
pub use navigation::*;
pub use rate::*;
pub use raw_data::*;
