//! Render configuration owned by the presentation layer.
//!
//! The core only reads these values; changes arrive as whole new
//! [`RenderConfig`] values and are routed by [`crate::Sculpture::apply_config`].

use crate::constants::*;
use crate::error::ConfigError;
use crate::shapes::Archetype;
use glam::Vec3;
use std::time::Duration;

/// RGB color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub Vec3);

impl Color {
    pub const WHITE: Self = Self(Vec3::ONE);

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(Vec3::new(r, g, b))
    }

    /// Parse `#RRGGBB`, `RRGGBB` or the `#RGB` shorthand.
    pub fn from_hex(text: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(text.to_string());
        let digits = text.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(invalid()),
        };
        let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
        let channel = |shift: u32| ((value >> shift) & 0xFF) as f32 / 255.0;
        Ok(Self::rgb(channel(16), channel(8), channel(0)))
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        let c = (self.0.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
        [c.x as u8, c.y as u8, c.z as u8]
    }

    pub fn to_array(self) -> [f32; 3] {
        self.0.to_array()
    }

    /// Linear blend toward `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self(self.0.lerp(other.0, t.clamp(0.0, 1.0)))
    }
}

impl Default for Color {
    fn default() -> Self {
        // First palette entry; keep in sync with PALETTE[0].
        Self::rgb(0x33 as f32 / 255.0, 1.0, 0x57 as f32 / 255.0)
    }
}

/// The selectable palette, parsed.
pub fn palette() -> Vec<Color> {
    PALETTE
        .iter()
        .filter_map(|hex| Color::from_hex(hex).ok())
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub particle_count: usize,
    pub primary_color: Color,
    pub archetype: Archetype,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            primary_color: Color::default(),
            archetype: Archetype::ChristmasTree,
        }
    }
}

impl RenderConfig {
    pub fn with_particle_count(mut self, count: usize) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::EmptyPointCloud);
        }
        self.particle_count = count;
        Ok(self)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.primary_color = color;
        self
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = archetype;
        self
    }
}

/// Responsive particle budget: narrow viewports get fewer points.
pub fn particle_budget_for_width(viewport_px: f64) -> usize {
    if viewport_px < COMPACT_VIEWPORT_PX {
        PARTICLE_BUDGET_COMPACT
    } else {
        PARTICLE_BUDGET_WIDE
    }
}

/// Options a host passes to its hand detector.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectorOptions {
    pub max_hands: usize,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
    pub init_timeout: Duration,
    pub max_retries: u32,
    pub retry_backoff: Duration,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            max_hands: 1,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
            init_timeout: Duration::from_secs(90),
            max_retries: 2,
            retry_backoff: Duration::from_secs(2),
        }
    }
}
