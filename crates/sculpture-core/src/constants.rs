use std::f32::consts::PI;

// Shared shape/animation tuning constants used by both web and native frontends.

// Buffer sizes
pub const DEFAULT_PARTICLE_COUNT: usize = 8000;
pub const DEFAULT_ORNAMENT_COUNT: usize = 17;

// Shape dimensions (world units)
pub const SPHERE_RADIUS: f32 = 4.0;
pub const HEART_SCALE: f32 = 0.25; // shrinks the 16-unit parametric curve to scene size
pub const FLOWER_PETALS: f32 = 3.0;
pub const FLOWER_AMPLITUDE: f32 = 3.0;
pub const FLOWER_FLATTEN: f32 = 0.5; // vertical compression of the bloom
pub const SATURN_BODY_RADIUS: f32 = 2.5;
pub const SATURN_RING_INNER: f32 = 3.5;
pub const SATURN_RING_OUTER: f32 = 6.0;
pub const SATURN_RING_THICKNESS: f32 = 0.2;
pub const SATURN_TILT_RADIANS: f32 = PI / 6.0;
pub const BUDDHA_HEAD_RADIUS: f32 = 0.9;
pub const BUDDHA_HEAD_LIFT: f32 = 2.5;
pub const FIREWORKS_RADIUS: f32 = 6.0;

// Tiered tree profile, shared by the tree shape and the ornament layout
pub const TREE_LAYERS: usize = 5;
pub const TREE_HEIGHT: f32 = 6.0;
pub const TREE_MAX_RADIUS: f32 = 2.5;
pub const TREE_LAYER_TAPER: f32 = 0.8; // top layer keeps 20% of the bottom radius
pub const TREE_TRUNK_HEIGHT: f32 = 1.5;
pub const TREE_TRUNK_RADIUS: f32 = 0.4;
pub const TREE_STAR_JITTER: f32 = 0.4;
pub const TREE_STAR_RISE: f32 = 0.5;

// Morph
pub const MORPH_RATE_TRACKING: f32 = 4.0;
pub const MORPH_RATE_IDLE: f32 = 2.0;
pub const COLOR_BLEND_RATE: f32 = 2.0;

// Uniform scale
pub const SCALE_MIN: f32 = 0.8;
pub const SCALE_SPAN: f32 = 1.0;
pub const SCALE_SMOOTHING_TRACKING: f32 = 0.1; // fraction per frame
pub const SCALE_SMOOTHING_IDLE: f32 = 0.05; // fraction per frame
pub const BREATHE_AMPLITUDE: f32 = 0.05;

// Rotation
pub const YAW_GAIN: f32 = 2.5; // rad/s at full tilt
pub const YAW_DEAD_ZONE: f32 = 0.1;
pub const YAW_IDLE_SPEED: f32 = 0.1; // rad/s
pub const PITCH_GAIN: f32 = 0.5;
pub const PITCH_RATE_TRACKING: f32 = 2.0;
pub const PITCH_RATE_IDLE: f32 = 1.0;

// Gesture remap (normalized image units)
pub const OPENNESS_CLOSED_DISTANCE: f32 = 0.05;
pub const OPENNESS_OPEN_DISTANCE: f32 = 0.25;
pub const FALLBACK_OPENNESS: f32 = 0.5;

// Ornaments
pub const ORNAMENT_BASE_SIZE: f32 = 0.4;
pub const ORNAMENT_GALLERY_SIZE: f32 = 1.8;
pub const ORNAMENT_EXPANSION: f32 = 3.5; // radial push at full openness
pub const ORNAMENT_VERTICAL_SPREAD: f32 = 1.0;
pub const ORNAMENT_GALLERY_THRESHOLD: f32 = 0.5;
pub const ORNAMENT_ORBIT_SPEED: f32 = 0.1; // rad/s
pub const ORNAMENT_TRANSFORM_RATE: f32 = 3.0;
pub const ORNAMENT_FADE_RATE: f32 = 2.0;
pub const ORNAMENT_BOB_AMPLITUDE: f32 = 0.002;
pub const ORNAMENT_BOB_FREQUENCY: f32 = 2.0;
pub const ORNAMENT_OPACITY_IDLE: f32 = 0.8;
pub const ORNAMENT_OPACITY_GALLERY: f32 = 1.0;
pub const ORNAMENT_HANG_OFFSET: f32 = 0.2; // above the bottom of a layer
pub const ORNAMENT_EDGE_OFFSET: f32 = 0.1; // outside the layer rim
pub const GOLDEN_SPIRAL_FRACTION: f32 = 0.618;

// Procedural glyphs (pixels)
pub const PLACEHOLDER_GLYPH_SIZE: u32 = 64;
pub const PARTICLE_SPRITE_SIZE: u32 = 32;

// Presentation defaults
pub const PALETTE: [&str; 7] = [
    "#33FF57", // green, default for the tree
    "#FFD700", // gold
    "#FF5733", // red
    "#3357FF", // blue
    "#FF33F6", // pink
    "#33FFF6", // cyan
    "#FFFFFF", // white
];
pub const COMPACT_VIEWPORT_PX: f64 = 768.0;
pub const PARTICLE_BUDGET_COMPACT: usize = 2000;
pub const PARTICLE_BUDGET_WIDE: usize = 3000;
