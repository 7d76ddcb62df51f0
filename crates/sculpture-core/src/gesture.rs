//! Reduce one hand-landmark detection to a [`ControlSignal`].
//!
//! Stateless: the same landmark set always yields the same signal, and no
//! temporal filtering happens here. Consumers smooth on their side.

use crate::constants::{OPENNESS_CLOSED_DISTANCE, OPENNESS_OPEN_DISTANCE};
use crate::error::DetectionError;
use crate::signal::ControlSignal;
use glam::Vec3;
use smallvec::SmallVec;

/// Points per hand in the detector's topology.
pub const LANDMARK_COUNT: usize = 21;
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_BASE: usize = 9;

/// One hand: normalized image `x`/`y` in `[0, 1]` and relative depth `z`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandmarkSet {
    points: SmallVec<[Vec3; LANDMARK_COUNT]>,
}

/// The three landmarks the pipeline actually reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keypoints {
    pub thumb_tip: Vec3,
    pub index_tip: Vec3,
    pub middle_base: Vec3,
}

impl LandmarkSet {
    pub fn new(points: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Parse `x, y, z` triples as delivered by detector bindings.
    pub fn from_flat(values: &[f32]) -> Result<Self, DetectionError> {
        if values.len() % 3 != 0 {
            return Err(DetectionError::Ragged(values.len()));
        }
        Ok(Self::new(
            values.chunks_exact(3).map(|c| Vec3::new(c[0], c[1], c[2])),
        ))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Extract the keypoints, rejecting sets that lack them or carry
    /// non-finite coordinates.
    pub fn keypoints(&self) -> Result<Keypoints, DetectionError> {
        let fetch = |index: usize| -> Result<Vec3, DetectionError> {
            let p = self.get(index).ok_or(DetectionError::Malformed {
                expected: MIDDLE_BASE + 1,
                found: self.len(),
            })?;
            if p.is_finite() {
                Ok(p)
            } else {
                Err(DetectionError::NonFinite { index })
            }
        };
        Ok(Keypoints {
            thumb_tip: fetch(THUMB_TIP)?,
            index_tip: fetch(INDEX_TIP)?,
            middle_base: fetch(MIDDLE_BASE)?,
        })
    }
}

/// Map thumb-to-index distance onto `[0, 1]`; the band edges clamp.
///
/// The remap runs in f64 so round inputs (0.15 -> 0.5) come out exact.
pub fn openness_from_distance(distance: f32) -> f32 {
    if distance <= OPENNESS_CLOSED_DISTANCE {
        return 0.0;
    }
    if distance >= OPENNESS_OPEN_DISTANCE {
        return 1.0;
    }
    let closed = f64::from(OPENNESS_CLOSED_DISTANCE);
    let open = f64::from(OPENNESS_OPEN_DISTANCE);
    ((f64::from(distance) - closed) / (open - closed)).clamp(0.0, 1.0) as f32
}

/// Offset of a normalized coordinate from frame centre, doubled and negated
/// to match the mirrored camera preview.
#[inline]
pub fn tilt_from_coordinate(c: f32) -> f32 {
    (-((c - 0.5) * 2.0)).clamp(-1.0, 1.0)
}

/// Interpret a single detection. `None` and malformed sets both yield
/// [`ControlSignal::FALLBACK`].
pub fn interpret(landmarks: Option<&LandmarkSet>) -> ControlSignal {
    let Some(set) = landmarks else {
        return ControlSignal::FALLBACK;
    };
    match set.keypoints() {
        Ok(k) => {
            let distance = k.thumb_tip.distance(k.index_tip);
            ControlSignal::tracked(
                openness_from_distance(distance),
                tilt_from_coordinate(k.middle_base.x),
                tilt_from_coordinate(k.middle_base.y),
            )
        }
        Err(e) => {
            log::debug!("[gesture] treating detection as no hand: {e}");
            ControlSignal::FALLBACK
        }
    }
}

/// Interpret a multi-hand result by tracking only the first hand.
pub fn interpret_hands(hands: &[LandmarkSet]) -> ControlSignal {
    interpret(hands.first())
}
