use crate::input;
use sculpture_core::RenderConfig;
use web_sys as web;

#[inline]
pub fn viewport_width() -> Option<f64> {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

/// Default configuration sized for the current viewport.
pub fn viewport_config() -> anyhow::Result<RenderConfig> {
    let width = viewport_width();
    if width.is_none() {
        log::warn!("[dom] viewport width unavailable; assuming a wide screen");
    }
    Ok(RenderConfig::default().with_particle_count(input::particle_budget(width))?)
}
