//! Small procedural RGBA textures: the ornament placeholder and the round
//! point sprite.

use glam::{Vec2, Vec4};

/// Square RGBA8 image, row-major, 4 bytes per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub size: u32,
    pub rgba: Vec<u8>,
}

impl Glyph {
    fn from_fn(size: u32, shade: impl Fn(Vec2) -> Vec4) -> Self {
        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let c = shade(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
                let c = (c.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
                rgba.extend_from_slice(&[c.x as u8, c.y as u8, c.z as u8, c.w as u8]);
            }
        }
        Self { size, rgba }
    }

    /// RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let i = ((y * self.size + x) * 4) as usize;
        self.rgba.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

// gradient stops: gold core -> amber -> transparent orange rim
const GLOW_STOPS: [(f32, Vec4); 3] = [
    (0.0, Vec4::new(1.0, 223.0 / 255.0, 0.0, 1.0)),
    (0.5, Vec4::new(1.0, 180.0 / 255.0, 0.0, 0.8)),
    (1.0, Vec4::new(1.0, 100.0 / 255.0, 0.0, 0.0)),
];

fn gradient_at(t: f32) -> Vec4 {
    let t = t.clamp(0.0, 1.0);
    for pair in GLOW_STOPS.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            return c0.lerp(c1, (t - t0) / (t1 - t0));
        }
    }
    GLOW_STOPS[GLOW_STOPS.len() - 1].1
}

/// Glowing gold orb drawn in place of an ornament image that failed to load.
pub fn placeholder_glyph(size: u32) -> Glyph {
    let s = size as f32;
    let center = Vec2::splat(s / 2.0);
    let inner = s * 2.0 / 64.0;
    let outer = s * 30.0 / 64.0;
    Glyph::from_fn(size, |p| {
        let d = p.distance(center);
        gradient_at((d - inner) / (outer - inner))
    })
}

/// White anti-aliased disc used as the point sprite.
pub fn particle_sprite(size: u32) -> Glyph {
    let s = size as f32;
    let center = Vec2::splat(s / 2.0);
    let radius = s * 14.0 / 32.0;
    Glyph::from_fn(size, |p| {
        let coverage = (radius - p.distance(center) + 0.5).clamp(0.0, 1.0);
        Vec4::new(1.0, 1.0, 1.0, coverage)
    })
}
