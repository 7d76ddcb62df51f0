//! The per-frame control signal and the single-slot cell that carries it
//! from the detector callback to the frame loop.

use crate::constants::FALLBACK_OPENNESS;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Reduced hand state consumed by the morph engine and ornament controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlSignal {
    pub hand_present: bool,
    /// 0 = pinched, 1 = fully open.
    pub openness: f32,
    pub tilt_x: f32,
    pub tilt_y: f32,
}

impl ControlSignal {
    /// Value used whenever no hand is tracked.
    pub const FALLBACK: Self = Self {
        hand_present: false,
        openness: FALLBACK_OPENNESS,
        tilt_x: 0.0,
        tilt_y: 0.0,
    };

    /// A tracked hand; inputs are clamped into their documented ranges.
    pub fn tracked(openness: f32, tilt_x: f32, tilt_y: f32) -> Self {
        Self {
            hand_present: true,
            openness: openness.clamp(0.0, 1.0),
            tilt_x: tilt_x.clamp(-1.0, 1.0),
            tilt_y: tilt_y.clamp(-1.0, 1.0),
        }
    }
}

impl Default for ControlSignal {
    fn default() -> Self {
        Self::FALLBACK
    }
}

#[derive(Debug)]
struct Latest {
    signal: ControlSignal,
    epoch: u64,
}

/// Last-write-wins cell holding the most recent [`ControlSignal`].
///
/// Writers replace the whole value; readers copy it out, so a reader never
/// sees a half-written signal and never waits for a new one. The epoch lets
/// a tracker invalidate writers that belong to a cancelled session.
#[derive(Clone, Debug)]
pub struct SignalSlot {
    inner: Arc<Mutex<Latest>>,
}

impl Default for SignalSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalSlot {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Latest {
                signal: ControlSignal::FALLBACK,
                epoch: 0,
            })),
        }
    }

    // A panic while holding the lock cannot leave a torn value behind
    // (the signal is `Copy` and assigned whole), so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Latest> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn latest(&self) -> ControlSignal {
        self.lock().signal
    }

    pub fn epoch(&self) -> u64 {
        self.lock().epoch
    }

    /// Replace the value unconditionally.
    pub fn publish(&self, signal: ControlSignal) {
        self.lock().signal = signal;
    }

    /// Replace the value only if `epoch` is still current.
    pub fn publish_in(&self, epoch: u64, signal: ControlSignal) -> bool {
        let mut latest = self.lock();
        if latest.epoch != epoch {
            return false;
        }
        latest.signal = signal;
        true
    }

    /// Start a new epoch, invalidating earlier writers, and reset the value.
    pub fn advance_epoch(&self, reset_to: ControlSignal) -> u64 {
        let mut latest = self.lock();
        latest.epoch = latest.epoch.wrapping_add(1);
        latest.signal = reset_to;
        latest.epoch
    }
}
