//! Image ornaments hung on the tree archetype.
//!
//! The layout is fixed at startup (deterministic golden-angle spiral over
//! the tree's layer profile). Each frame only the live transforms move:
//! they fan out into a gallery as the hand opens and settle back onto the
//! tree when it closes or leaves.

use crate::constants::*;
use crate::error::AssetError;
use crate::glyph::{placeholder_glyph, Glyph};
use crate::shapes::{tree_layer_bottom, tree_layer_radius};
use crate::signal::ControlSignal;
use crate::state::FrameTime;
use glam::{Quat, Vec3};
use std::f32::consts::TAU;

/// What a host should texture an ornament with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageHandle {
    /// Host-resolvable locator (file path or URL).
    Asset(String),
    /// Use [`OrnamentController::placeholder`].
    Placeholder,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrnamentRecord {
    pub base_position: Vec3,
    pub image: ImageHandle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrnamentTransform {
    pub position: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

/// Checks whether an ornament image can be loaded.
pub trait ImageResolver {
    fn resolve(&self, locator: &str) -> Result<(), AssetError>;
}

/// Default locator for ornament `index`.
pub fn image_locator(index: usize) -> String {
    format!("photos/{}.jpg", index + 1)
}

/// Fixed ornament positions: layer by `i mod layers`, angle by golden
/// fraction of a turn, just outside each layer's rim.
pub fn layout(count: usize) -> Vec<OrnamentRecord> {
    (0..count)
        .map(|i| {
            let layer = i % TREE_LAYERS;
            let y = tree_layer_bottom(layer) + ORNAMENT_HANG_OFFSET;
            let r = tree_layer_radius(layer) + ORNAMENT_EDGE_OFFSET;
            let angle = i as f32 * TAU * GOLDEN_SPIRAL_FRACTION;
            OrnamentRecord {
                base_position: Vec3::new(angle.cos() * r, y, angle.sin() * r),
                image: ImageHandle::Asset(image_locator(i)),
            }
        })
        .collect()
}

/// Where ornament `index` wants to be while a hand is present.
pub fn gallery_target(base: Vec3, index: usize, openness: f32, elapsed: f32) -> Vec3 {
    let dir = Vec3::new(base.x, 0.0, base.z).normalize_or_zero();
    let radius = base.length() + openness * ORNAMENT_EXPANSION;
    let side = if index % 2 == 0 { 1.0 } else { -1.0 };
    let y = base.y + openness * ORNAMENT_VERTICAL_SPREAD * side;
    let target = Vec3::new(dir.x * radius, y, dir.z * radius);
    if openness > ORNAMENT_GALLERY_THRESHOLD {
        Quat::from_rotation_y(elapsed * ORNAMENT_ORBIT_SPEED) * target
    } else {
        target
    }
}

#[inline]
fn approach(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

pub struct OrnamentController {
    records: Vec<OrnamentRecord>,
    transforms: Vec<OrnamentTransform>,
    group_scale: f32,
    placeholder: Glyph,
}

impl OrnamentController {
    pub fn new(count: usize) -> Self {
        Self::from_records(layout(count))
    }

    pub fn from_records(records: Vec<OrnamentRecord>) -> Self {
        let transforms = records
            .iter()
            .map(|r| OrnamentTransform {
                position: r.base_position,
                scale: ORNAMENT_BASE_SIZE,
                opacity: ORNAMENT_OPACITY_IDLE,
            })
            .collect();
        Self {
            records,
            transforms,
            group_scale: 0.0,
            placeholder: placeholder_glyph(PLACEHOLDER_GLYPH_SIZE),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[OrnamentRecord] {
        &self.records
    }

    pub fn transforms(&self) -> &[OrnamentTransform] {
        &self.transforms
    }

    /// Shared fade for the whole set: 0 hidden, 1 fully shown.
    pub fn group_scale(&self) -> f32 {
        self.group_scale
    }

    pub fn placeholder(&self) -> &Glyph {
        &self.placeholder
    }

    /// Check every asset image and swap unresolvable ones for the
    /// placeholder. Returns how many fell back.
    pub fn resolve_images(&mut self, resolver: &dyn ImageResolver) -> usize {
        let mut fallbacks = 0;
        for index in 0..self.records.len() {
            let outcome = match &self.records[index].image {
                ImageHandle::Asset(locator) => resolver.resolve(locator),
                ImageHandle::Placeholder => continue,
            };
            if let Err(e) = outcome {
                self.mark_unavailable(index, &e);
                fallbacks += 1;
            }
        }
        fallbacks
    }

    /// Host reports a load failure; the slot keeps rendering with the
    /// placeholder.
    pub fn mark_unavailable(&mut self, index: usize, error: &AssetError) {
        if let Some(record) = self.records.get_mut(index) {
            log::warn!("[ornament] {index}: {error}; using placeholder");
            record.image = ImageHandle::Placeholder;
        }
    }

    pub fn update(&mut self, time: FrameTime, signal: &ControlSignal, visible: bool) {
        let fade = (time.delta * ORNAMENT_FADE_RATE).clamp(0.0, 1.0);
        let group_target = if visible { 1.0 } else { 0.0 };
        self.group_scale = approach(self.group_scale, group_target, fade);

        let alpha = (time.delta * ORNAMENT_TRANSFORM_RATE).clamp(0.0, 1.0);
        for (i, (record, t)) in self.records.iter().zip(&mut self.transforms).enumerate() {
            let base = record.base_position;
            if signal.hand_present {
                let open = signal.openness;
                let size = ORNAMENT_BASE_SIZE + (ORNAMENT_GALLERY_SIZE - ORNAMENT_BASE_SIZE) * open;
                t.scale = approach(t.scale, size, alpha);
                t.position = t
                    .position
                    .lerp(gallery_target(base, i, open, time.elapsed), alpha);
                t.opacity = ORNAMENT_OPACITY_IDLE
                    + (ORNAMENT_OPACITY_GALLERY - ORNAMENT_OPACITY_IDLE) * open;
            } else {
                t.scale = approach(t.scale, ORNAMENT_BASE_SIZE, alpha);
                t.position = t.position.lerp(base, alpha);
                t.position.y += (time.elapsed * ORNAMENT_BOB_FREQUENCY + i as f32).sin()
                    * ORNAMENT_BOB_AMPLITUDE;
                t.opacity = approach(t.opacity, ORNAMENT_OPACITY_IDLE, alpha);
            }
        }
    }
}
