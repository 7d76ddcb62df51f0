use sculpture_core::{particle_budget_for_width, LandmarkSet, OrnamentTransform};

/// Floats per ornament in [`pack_ornaments`]: x, y, z, scale, opacity.
pub const ORNAMENT_STRIDE: usize = 5;

/// Turn the detector's flat `x, y, z` buffer into a landmark set.
///
/// An empty buffer means no hand; a buffer that cannot be parsed is
/// treated the same way rather than surfaced as an error.
#[inline]
pub fn detection_from_flat(flat: &[f32]) -> Option<LandmarkSet> {
    if flat.is_empty() {
        return None;
    }
    match LandmarkSet::from_flat(flat) {
        Ok(set) => Some(set),
        Err(e) => {
            log::debug!("[input] dropping detection: {e}");
            None
        }
    }
}

/// JS hands session epochs back as plain numbers.
#[inline]
pub fn epoch_from_js(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64)
        .then_some(value as u64)
}

pub fn pack_ornaments(transforms: &[OrnamentTransform]) -> Vec<f32> {
    let mut out = Vec::with_capacity(transforms.len() * ORNAMENT_STRIDE);
    for t in transforms {
        out.extend_from_slice(&[t.position.x, t.position.y, t.position.z, t.scale, t.opacity]);
    }
    out
}

/// Particle budget for a viewport; unknown widths get the wide budget.
#[inline]
pub fn particle_budget(viewport_px: Option<f64>) -> usize {
    particle_budget_for_width(viewport_px.unwrap_or(f64::INFINITY))
}
