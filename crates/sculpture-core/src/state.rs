//! Frame timing and the read-only view handed to rendering hosts.
//!
//! These types avoid platform APIs so both the native and web frontends can
//! build them. `instant` supplies a monotonic clock on wasm as well.

use crate::config::Color;
use crate::shapes::PointCloud;
use instant::Instant;

/// Timing for one frame, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    pub delta: f32,
    pub elapsed: f32,
}

impl FrameTime {
    pub fn new(delta: f32, elapsed: f32) -> Self {
        Self { delta, elapsed }
    }

    /// The frame after this one, `delta` seconds later.
    pub fn advance(self, delta: f32) -> Self {
        Self {
            delta,
            elapsed: self.elapsed + delta,
        }
    }
}

/// Wall-clock frame timer.
#[derive(Clone, Debug)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = (now - self.last).as_secs_f32();
        self.last = now;
        FrameTime {
            delta,
            elapsed: (now - self.start).as_secs_f32(),
        }
    }
}

/// Whole-sculpture rotation in radians, applied by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    /// Rotation about the horizontal axis.
    pub pitch: f32,
    /// Rotation about the vertical axis.
    pub yaw: f32,
}

/// Everything the host draws for the point cloud this frame.
#[derive(Clone, Copy, Debug)]
pub struct SculptureFrame<'a> {
    pub positions: &'a PointCloud,
    pub color: Color,
    pub scale: f32,
    pub orientation: Orientation,
}
