//! Gesture tracking sessions.
//!
//! The detector delivers results on its own schedule. Each result is
//! interpreted and written into the shared [`SignalSlot`] through a
//! [`TrackingSession`]; the frame loop reads whatever is there. Disabling
//! tracking resets the slot to the fallback and invalidates every session
//! handed out so far, so a late callback cannot resurrect a stale hand and
//! a detection loop can poll [`TrackingSession::is_live`] to stop itself.

use crate::error::DetectionError;
use crate::gesture::{interpret, LandmarkSet};
use crate::signal::{ControlSignal, SignalSlot};

/// Write handle for one enable/disable cycle.
#[derive(Clone, Debug)]
pub struct TrackingSession {
    slot: SignalSlot,
    epoch: u64,
}

impl TrackingSession {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// False once tracking was disabled (or re-enabled) after this session
    /// was created.
    pub fn is_live(&self) -> bool {
        self.slot.epoch() == self.epoch
    }

    /// Interpret and publish one detection. Returns false when the session
    /// is stale and the result was discarded.
    pub fn submit(&self, landmarks: Option<&LandmarkSet>) -> bool {
        let accepted = self.slot.publish_in(self.epoch, interpret(landmarks));
        if !accepted {
            log::debug!("[tracker] discarded detection from stale session {}", self.epoch);
        }
        accepted
    }

    /// Record a detector failure: the hand is treated as absent.
    pub fn report_failure(&self, error: &DetectionError) -> bool {
        log::warn!("[tracker] detection failed: {error}");
        self.slot.publish_in(self.epoch, ControlSignal::FALLBACK)
    }
}

#[derive(Debug, Default)]
pub struct GestureTracker {
    slot: SignalSlot,
    active: Option<u64>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.active.is_some()
    }

    /// Most recently completed signal. Never blocks on the detector.
    pub fn latest(&self) -> ControlSignal {
        self.slot.latest()
    }

    pub fn slot(&self) -> &SignalSlot {
        &self.slot
    }

    /// Turn tracking on. Enabling twice returns the already live session.
    pub fn enable(&mut self) -> TrackingSession {
        let epoch = match self.active {
            Some(epoch) => epoch,
            None => {
                let epoch = self.slot.advance_epoch(ControlSignal::FALLBACK);
                log::info!("[tracker] tracking enabled (session {epoch})");
                self.active = Some(epoch);
                epoch
            }
        };
        TrackingSession {
            slot: self.slot.clone(),
            epoch,
        }
    }

    /// Turn tracking off, reset the signal and orphan all sessions.
    pub fn disable(&mut self) {
        if let Some(epoch) = self.active.take() {
            self.slot.advance_epoch(ControlSignal::FALLBACK);
            log::info!("[tracker] tracking disabled (session {epoch} closed)");
        }
    }
}
