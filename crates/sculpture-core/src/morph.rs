//! The morph engine: owns the live point buffer and eases it, the color,
//! the uniform scale and the orientation toward their targets every frame.

use crate::config::{Color, RenderConfig};
use crate::constants::*;
use crate::shapes::{generate_with, Archetype, PointCloud};
use crate::signal::ControlSignal;
use crate::state::{FrameTime, Orientation, SculptureFrame};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Shape shown before the first target is applied and after a reset.
pub const STARTUP_ARCHETYPE: Archetype = Archetype::Sphere;

pub struct MorphEngine {
    current: PointCloud,
    target: PointCloud,
    current_color: Color,
    target_color: Color,
    archetype: Archetype,
    scale: f32,
    orientation: Orientation,
    rng: StdRng,
}

impl MorphEngine {
    /// Start from a sphere and head toward `config.archetype`.
    pub fn new(config: &RenderConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let current = generate_with(STARTUP_ARCHETYPE, config.particle_count, &mut rng);
        let target = generate_with(config.archetype, config.particle_count, &mut rng);
        Self {
            current,
            target,
            current_color: config.primary_color,
            target_color: config.primary_color,
            archetype: config.archetype,
            scale: 1.0,
            orientation: Orientation::default(),
            rng,
        }
    }

    pub fn particle_count(&self) -> usize {
        self.current.len()
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Replace the target with a freshly sampled cloud. The live buffer is
    /// untouched, so motion continues from wherever it is.
    pub fn set_target(&mut self, archetype: Archetype) {
        self.archetype = archetype;
        self.target = generate_with(archetype, self.current.len(), &mut self.rng);
        log::info!("[morph] target -> {archetype} ({} points)", self.target.len());
    }

    pub fn set_color(&mut self, color: Color) {
        self.target_color = color;
        log::info!("[morph] color -> {}", color.to_hex());
    }

    /// Change the particle count. Index roles cannot survive a size change,
    /// so both buffers are regenerated as at startup.
    pub fn reset(&mut self, particle_count: usize) {
        self.current = generate_with(STARTUP_ARCHETYPE, particle_count, &mut self.rng);
        self.target = generate_with(self.archetype, particle_count, &mut self.rng);
        log::info!(
            "[morph] buffers reset to {particle_count} points (target {})",
            self.archetype
        );
    }

    pub fn update(&mut self, time: FrameTime, signal: &ControlSignal) {
        let dt = (time.delta * morph_rate(signal)).clamp(0.0, 1.0);
        morph_step(self.current.points_mut(), self.target.points(), dt);

        self.current_color = self
            .current_color
            .lerp(self.target_color, time.delta * COLOR_BLEND_RATE);

        let (scale_target, smoothing) = scale_target(signal, time.elapsed);
        self.scale += (scale_target - self.scale) * smoothing;

        self.orientation = step_orientation(self.orientation, signal, time.delta);
    }

    pub fn positions(&self) -> &PointCloud {
        &self.current
    }

    pub fn target_positions(&self) -> &PointCloud {
        &self.target
    }

    pub fn color(&self) -> Color {
        self.current_color
    }

    pub fn target_color(&self) -> Color {
        self.target_color
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn frame(&self) -> SculptureFrame<'_> {
        SculptureFrame {
            positions: &self.current,
            color: self.current_color,
            scale: self.scale,
            orientation: self.orientation,
        }
    }
}

/// Morph speed: faster while a hand is steering.
#[inline]
pub fn morph_rate(signal: &ControlSignal) -> f32 {
    if signal.hand_present {
        MORPH_RATE_TRACKING
    } else {
        MORPH_RATE_IDLE
    }
}

/// Move every point a fraction `dt` of the way toward its target.
///
/// Equal inputs are a fixed point. `dt` must be in `[0, 1]`; at 1 the
/// buffer lands exactly on the target.
pub fn morph_step(current: &mut [Vec3], target: &[Vec3], dt: f32) {
    for (c, t) in current.iter_mut().zip(target) {
        *c += (*t - *c) * dt;
    }
}

/// Desired uniform scale and the per-frame smoothing fraction toward it.
pub fn scale_target(signal: &ControlSignal, elapsed: f32) -> (f32, f32) {
    if signal.hand_present {
        (
            SCALE_MIN + signal.openness * SCALE_SPAN,
            SCALE_SMOOTHING_TRACKING,
        )
    } else {
        (
            1.0 + elapsed.sin() * BREATHE_AMPLITUDE,
            SCALE_SMOOTHING_IDLE,
        )
    }
}

/// Yaw speed in rad/s. Small tilts inside the dead zone hold still.
pub fn yaw_velocity(signal: &ControlSignal) -> f32 {
    if !signal.hand_present {
        return YAW_IDLE_SPEED;
    }
    if signal.tilt_x.abs() < YAW_DEAD_ZONE {
        0.0
    } else {
        signal.tilt_x * YAW_GAIN
    }
}

pub fn step_orientation(o: Orientation, signal: &ControlSignal, delta: f32) -> Orientation {
    let (pitch_target, rate) = if signal.hand_present {
        (signal.tilt_y * PITCH_GAIN, PITCH_RATE_TRACKING)
    } else {
        (0.0, PITCH_RATE_IDLE)
    };
    let alpha = (delta * rate).clamp(0.0, 1.0);
    Orientation {
        pitch: o.pitch + (pitch_target - o.pitch) * alpha,
        yaw: (o.yaw + yaw_velocity(signal) * delta).rem_euclid(TAU),
    }
}
