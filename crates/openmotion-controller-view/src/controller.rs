//! Per-controller view aggregate: ordering, connectivity, and dispatch.

use std::time::Instant;

use openmotion_frame_protocol::{ControllerFrame, FramePayload};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::motion::MotionView;
use crate::navigation::NavigationView;
use crate::rate::FrameRateEstimator;

/// Which physical controller layout a view aggregate is currently bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeviceKind {
    #[default]
    None,
    Motion,
    Navigation,
}

/// The one active device-specific view, tagged by kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum DeviceState {
    #[default]
    None,
    Motion(MotionView),
    Navigation(NavigationView),
}

impl DeviceState {
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::None => DeviceKind::None,
            Self::Motion(_) => DeviceKind::Motion,
            Self::Navigation(_) => DeviceKind::Navigation,
        }
    }
}

/// Ordered, stale-tolerant view of one controller.
///
/// Owns exactly one device-specific view (selected by the frames' declared
/// controller type), enforces strictly increasing sequence numbers, tracks
/// connectivity and listener bookkeeping, and maintains a smoothed
/// frame-arrival-rate estimate.
///
/// Construction with a concrete id binds the aggregate; [`clear`] returns it
/// to the unbound state (`controller_id == -1`).
///
/// [`clear`]: ControllerView::clear
#[derive(Debug, Clone)]
pub struct ControllerView {
    controller_id: i32,
    sequence_num: i32,
    listener_count: u32,
    is_connected: bool,
    state: DeviceState,
    rate: FrameRateEstimator,
}

impl ControllerView {
    /// A view bound to `controller_id`, with no frame applied yet.
    pub fn new(controller_id: i32) -> Self {
        Self::new_at(controller_id, Instant::now())
    }

    /// Like [`new`](Self::new) with an explicit clock origin, for
    /// deterministic tests.
    pub fn new_at(controller_id: i32, now: Instant) -> Self {
        Self {
            controller_id,
            sequence_num: -1,
            listener_count: 0,
            is_connected: false,
            state: DeviceState::None,
            rate: FrameRateEstimator::new_at(now),
        }
    }

    /// Return to the unbound state: id −1, sequence −1, no listeners,
    /// disconnected, no device view, rate estimate restarted at 0 fps.
    pub fn clear(&mut self) {
        self.controller_id = -1;
        self.sequence_num = -1;
        self.listener_count = 0;
        self.is_connected = false;
        self.state = DeviceState::None;
        self.rate.reset_at(Instant::now());
    }

    /// Fold one decoded frame into the aggregate.
    ///
    /// Equivalent to [`apply_frame_at`](Self::apply_frame_at) with
    /// `Instant::now()`.
    ///
    /// # Panics
    ///
    /// Panics when the frame's embedded controller id does not match this
    /// view's id: the transport routes frames by id, so a mismatch is a
    /// caller bug, never a runtime condition to recover from.
    pub fn apply_frame(&mut self, frame: &ControllerFrame) {
        self.apply_frame_at(frame, Instant::now());
    }

    /// [`apply_frame`](Self::apply_frame) with an injected arrival instant.
    ///
    /// # Panics
    ///
    /// Panics on a controller-id mismatch, as [`apply_frame`](Self::apply_frame).
    pub fn apply_frame_at(&mut self, frame: &ControllerFrame, now: Instant) {
        assert_eq!(
            frame.controller_id, self.controller_id,
            "frame routed to the wrong controller view"
        );

        // Every physical arrival counts toward the rate estimate, even when
        // the payload is discarded as stale below.
        self.rate.record_arrival(now);

        if frame.sequence_num <= self.sequence_num {
            trace!(
                controller_id = self.controller_id,
                frame_sequence = frame.sequence_num,
                current_sequence = self.sequence_num,
                "dropping stale or duplicate frame"
            );
            return;
        }

        self.sequence_num = frame.sequence_num;
        if self.is_connected != frame.is_connected {
            debug!(
                controller_id = self.controller_id,
                connected = frame.is_connected,
                "controller connectivity changed"
            );
        }
        self.is_connected = frame.is_connected;

        match &frame.payload {
            FramePayload::Motion(_) => {
                if let DeviceState::Motion(view) = &mut self.state {
                    view.apply_frame(frame);
                } else {
                    debug!(
                        controller_id = self.controller_id,
                        "binding motion controller view"
                    );
                    let mut view = MotionView::default();
                    view.apply_frame(frame);
                    self.state = DeviceState::Motion(view);
                }
            }
            FramePayload::Navigation(_) => {
                if let DeviceState::Navigation(view) = &mut self.state {
                    view.apply_frame(frame);
                } else {
                    debug!(
                        controller_id = self.controller_id,
                        "binding navigation controller view"
                    );
                    let mut view = NavigationView::default();
                    view.apply_frame(frame);
                    self.state = DeviceState::Navigation(view);
                }
            }
        }
    }

    /// The stable id this aggregate is bound to, or −1 when unbound.
    pub fn controller_id(&self) -> i32 {
        self.controller_id
    }

    /// Whether the aggregate holds a real controller id.
    pub fn is_bound(&self) -> bool {
        self.controller_id != -1
    }

    /// Last applied sequence number; −1 while unbound or never applied.
    pub fn sequence_num(&self) -> i32 {
        if self.is_bound() { self.sequence_num } else { -1 }
    }

    /// Whether the device was connected as of the last applied frame.
    pub fn is_connected(&self) -> bool {
        self.is_bound() && self.is_connected
    }

    pub fn device_kind(&self) -> DeviceKind {
        self.state.kind()
    }

    /// The bound motion view, when the aggregate is tracking one.
    pub fn motion_view(&self) -> Option<&MotionView> {
        match &self.state {
            DeviceState::Motion(view) => Some(view),
            _ => None,
        }
    }

    /// The bound navigation view, when the aggregate is tracking one.
    pub fn navigation_view(&self) -> Option<&NavigationView> {
        match &self.state {
            DeviceState::Navigation(view) => Some(view),
            _ => None,
        }
    }

    /// Smoothed frame-arrival rate in frames per second.
    pub fn data_frame_fps(&self) -> f32 {
        self.rate.smoothed_fps()
    }

    /// Register one observer. Advisory bookkeeping for the owning registry;
    /// gates nothing in this layer.
    pub fn inc_listener_count(&mut self) {
        self.listener_count += 1;
    }

    /// Unregister one observer.
    ///
    /// # Panics
    ///
    /// Panics on underflow; unbalanced dec calls are a caller bug.
    pub fn dec_listener_count(&mut self) {
        assert!(self.listener_count > 0, "listener count underflow");
        self.listener_count -= 1;
    }

    pub fn listener_count(&self) -> u32 {
        self.listener_count
    }
}
