#![cfg(target_arch = "wasm32")]
//! Browser bindings. The page owns the renderer (three.js or similar) and
//! the hand detector; this module owns all sculpture state and hands the
//! renderer flat buffers each frame.

use sculpture_core::{
    particle_sprite, Archetype, AssetError, Color, DetectionError, FrameClock, ImageHandle,
    Sculpture, TrackingSession, PARTICLE_SPRITE_SIZE,
};
use wasm_bindgen::prelude::*;

mod dom;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sculpture-web starting");
    Ok(())
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct SculptureHandle {
    sculpture: Sculpture,
    clock: FrameClock,
    session: Option<TrackingSession>,
}

#[wasm_bindgen]
impl SculptureHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SculptureHandle, JsValue> {
        let config = dom::viewport_config().map_err(js_error)?;
        Ok(SculptureHandle {
            sculpture: Sculpture::new(config, rand::random()),
            clock: FrameClock::new(),
            session: None,
        })
    }

    // ---------------- Presentation layer mutations ----------------

    pub fn set_shape(&mut self, name: &str) -> Result<(), JsValue> {
        let archetype: Archetype = name.parse().map_err(js_error)?;
        self.sculpture.select_archetype(archetype);
        Ok(())
    }

    pub fn set_color(&mut self, hex: &str) -> Result<(), JsValue> {
        let color = Color::from_hex(hex).map_err(js_error)?;
        self.sculpture.select_color(color);
        Ok(())
    }

    pub fn set_particle_count(&mut self, count: u32) -> Result<(), JsValue> {
        self.sculpture
            .set_particle_count(count as usize)
            .map_err(js_error)
    }

    pub fn shape_labels() -> Vec<JsValue> {
        Archetype::ALL
            .iter()
            .map(|a| JsValue::from_str(a.label()))
            .collect()
    }

    // ---------------- Detector bridge ----------------

    /// Returns the session epoch the detector must pass back with results.
    pub fn start_tracking(&mut self) -> f64 {
        let session = self.sculpture.tracker_mut().enable();
        let epoch = session.epoch() as f64;
        self.session = Some(session);
        epoch
    }

    pub fn stop_tracking(&mut self) {
        self.sculpture.tracker_mut().disable();
        self.session = None;
    }

    /// Whether a detection loop for `epoch` should schedule another pass.
    pub fn is_tracking(&self, epoch: f64) -> bool {
        match (&self.session, input::epoch_from_js(epoch)) {
            (Some(s), Some(e)) => s.epoch() == e && s.is_live(),
            _ => false,
        }
    }

    /// Submit one detection (empty array = no hand). Returns false when
    /// the result belongs to a closed session and was discarded.
    pub fn submit_landmarks(&mut self, epoch: f64, flat: &[f32]) -> bool {
        if !self.is_tracking(epoch) {
            return false;
        }
        let hand = input::detection_from_flat(flat);
        self.session
            .as_ref()
            .is_some_and(|s| s.submit(hand.as_ref()))
    }

    pub fn report_detector_failure(&mut self, message: String) {
        match &self.session {
            Some(s) => {
                s.report_failure(&DetectionError::Unavailable(message));
            }
            None => log::warn!("[web] detector failure while tracking is off: {message}"),
        }
    }

    // ---------------- Frame ----------------

    pub fn frame(&mut self) {
        let time = self.clock.tick();
        self.sculpture.tick(time);
    }

    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.sculpture.morph().positions().as_flat())
    }

    pub fn particle_count(&self) -> u32 {
        self.sculpture.morph().particle_count() as u32
    }

    pub fn color(&self) -> Vec<f32> {
        self.sculpture.morph().color().to_array().to_vec()
    }

    pub fn scale(&self) -> f32 {
        self.sculpture.morph().scale()
    }

    pub fn pitch(&self) -> f32 {
        self.sculpture.morph().orientation().pitch
    }

    pub fn yaw(&self) -> f32 {
        self.sculpture.morph().orientation().yaw
    }

    pub fn hand_present(&self) -> bool {
        self.sculpture.tracker().latest().hand_present
    }

    pub fn openness(&self) -> f32 {
        self.sculpture.tracker().latest().openness
    }

    // ---------------- Ornaments ----------------

    pub fn ornament_count(&self) -> u32 {
        self.sculpture.ornaments().len() as u32
    }

    pub fn ornament_group_scale(&self) -> f32 {
        self.sculpture.ornaments().group_scale()
    }

    /// `x, y, z, scale, opacity` per ornament.
    pub fn ornament_transforms(&self) -> js_sys::Float32Array {
        let packed = input::pack_ornaments(self.sculpture.ornaments().transforms());
        js_sys::Float32Array::from(packed.as_slice())
    }

    /// Image URL for an ornament, or `undefined` when the placeholder
    /// glyph should be drawn instead.
    pub fn ornament_image(&self, index: u32) -> Option<String> {
        match &self.sculpture.ornaments().records().get(index as usize)?.image {
            ImageHandle::Asset(url) => Some(url.clone()),
            ImageHandle::Placeholder => None,
        }
    }

    pub fn ornament_image_failed(&mut self, index: u32) {
        let url = self.ornament_image(index).unwrap_or_default();
        self.sculpture
            .ornaments_mut()
            .mark_unavailable(index as usize, &AssetError::Missing(url));
    }

    pub fn placeholder_glyph(&self) -> js_sys::Uint8ClampedArray {
        js_sys::Uint8ClampedArray::from(self.sculpture.ornaments().placeholder().rgba.as_slice())
    }

    pub fn placeholder_glyph_size(&self) -> u32 {
        self.sculpture.ornaments().placeholder().size
    }

    pub fn particle_sprite() -> js_sys::Uint8ClampedArray {
        js_sys::Uint8ClampedArray::from(particle_sprite(PARTICLE_SPRITE_SIZE).rgba.as_slice())
    }
}
