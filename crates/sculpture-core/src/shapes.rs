//! Procedural point clouds for the seven sculpture archetypes.
//!
//! Every generator draws exactly `count` independent samples. Index order
//! carries no meaning here; the morph engine assigns each index its role.

use crate::constants::*;
use crate::error::ConfigError;
use glam::{Quat, Vec3};
use rand::distributions::Distribution;
use rand::Rng;
use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Archetype {
    Sphere,
    Heart,
    Flower,
    Saturn,
    Buddha,
    Fireworks,
    ChristmasTree,
}

impl Archetype {
    /// All archetypes in selector order.
    pub const ALL: [Archetype; 7] = [
        Archetype::Sphere,
        Archetype::Heart,
        Archetype::Flower,
        Archetype::Saturn,
        Archetype::Buddha,
        Archetype::Fireworks,
        Archetype::ChristmasTree,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Archetype::Sphere => "Sphere",
            Archetype::Heart => "Heart",
            Archetype::Flower => "Flower",
            Archetype::Saturn => "Saturn",
            Archetype::Buddha => "Buddha",
            Archetype::Fireworks => "Fireworks",
            Archetype::ChristmasTree => "Christmas Tree",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Archetype {
    type Err = ConfigError;

    /// Case-insensitive; spaces, dashes and underscores are ignored so
    /// "Christmas Tree", "christmas_tree" and "ChristmasTree" all match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        Archetype::ALL
            .into_iter()
            .find(|a| a.label().replace(' ', "").to_ascii_lowercase() == key)
            .or_else(|| (key == "tree").then_some(Archetype::ChristmasTree))
            .ok_or_else(|| ConfigError::UnknownArchetype(s.to_string()))
    }
}

/// Fixed-size, index-stable set of particle positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<Vec3>,
}

impl PointCloud {
    pub fn from_points(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Vec3] {
        &mut self.points
    }

    /// Positions as `x, y, z` triples, ready for a vertex buffer upload.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }

    /// Axis-aligned `(min, max)`, or `None` for an empty cloud.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }
}

/// Generate a fresh cloud using the thread-local RNG.
pub fn generate(archetype: Archetype, count: usize) -> PointCloud {
    generate_with(archetype, count, &mut rand::thread_rng())
}

/// Generate a fresh cloud from the supplied RNG.
pub fn generate_with<R: Rng + ?Sized>(
    archetype: Archetype,
    count: usize,
    rng: &mut R,
) -> PointCloud {
    let points = (0..count).map(|_| sample_point(archetype, rng)).collect();
    PointCloud { points }
}

fn sample_point<R: Rng + ?Sized>(archetype: Archetype, rng: &mut R) -> Vec3 {
    match archetype {
        Archetype::Sphere => point_in_ball(rng, SPHERE_RADIUS),
        Archetype::Heart => heart(rng),
        Archetype::Flower => flower(rng),
        Archetype::Saturn => saturn(rng),
        Archetype::Buddha => buddha(rng),
        Archetype::Fireworks => fireworks(rng),
        Archetype::ChristmasTree => christmas_tree(rng),
    }
}

// ---------------- Mixture sampling ----------------

/// Discrete distribution over population tags. Weights sum to 1.
struct Mixture<T: 'static> {
    parts: &'static [(T, f32)],
}

impl<T: Copy + 'static> Distribution<T> for Mixture<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        let mut roll = rng.gen::<f32>();
        for &(part, weight) in self.parts {
            if roll < weight {
                return part;
            }
            roll -= weight;
        }
        // rounding left a sliver past the last weight
        self.parts[self.parts.len() - 1].0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaturnPart {
    Body,
    Ring,
}

const SATURN: Mixture<SaturnPart> = Mixture {
    parts: &[(SaturnPart::Body, 0.4), (SaturnPart::Ring, 0.6)],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BuddhaPart {
    Head,
    Body,
    Base,
}

const BUDDHA: Mixture<BuddhaPart> = Mixture {
    parts: &[
        (BuddhaPart::Head, 0.2),
        (BuddhaPart::Body, 0.4),
        (BuddhaPart::Base, 0.4),
    ],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TreePart {
    Star,
    Trunk,
    Foliage,
}

const TREE: Mixture<TreePart> = Mixture {
    parts: &[
        (TreePart::Star, 0.05),
        (TreePart::Trunk, 0.10),
        (TreePart::Foliage, 0.85),
    ],
};

// ---------------- Samplers ----------------

/// Uniform point inside a ball: cube-root radius over uniform sphere angles.
fn point_in_ball<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = TAU * rng.gen::<f32>();
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    let r = rng.gen::<f32>().cbrt() * radius;
    spherical(r, theta, phi)
}

#[inline]
fn spherical(r: f32, theta: f32, phi: f32) -> Vec3 {
    let sin_phi = phi.sin();
    Vec3::new(
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * phi.cos(),
    )
}

#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

fn heart<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let t = rng.gen::<f32>() * TAU;
    let pull = rng.gen::<f32>().sqrt();
    let x = HEART_SCALE * 16.0 * t.sin().powi(3);
    let y = HEART_SCALE
        * (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    // Thickness is scaled by a second uniform on top of the pull; the
    // resulting bias toward the mid-plane is intentional.
    let z = centered(rng, 2.0) * rng.gen::<f32>() * 2.0;
    Vec3::new(x * pull, y * pull, z)
}

fn flower<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = rng.gen::<f32>() * std::f32::consts::PI;
    let r = FLOWER_AMPLITUDE * (FLOWER_PETALS * theta).cos() + 1.0;
    Vec3::new(
        r * theta.cos() * phi.sin(),
        r * phi.cos() * FLOWER_FLATTEN,
        r * theta.sin() * phi.sin(),
    )
}

fn saturn<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let p = match SATURN.sample(rng) {
        SaturnPart::Body => point_in_ball(rng, SATURN_BODY_RADIUS),
        SaturnPart::Ring => {
            let angle = rng.gen::<f32>() * TAU;
            let dist = rng.gen_range(SATURN_RING_INNER..SATURN_RING_OUTER);
            Vec3::new(
                angle.cos() * dist,
                centered(rng, SATURN_RING_THICKNESS),
                angle.sin() * dist,
            )
        }
    };
    saturn_tilt() * p
}

#[inline]
fn saturn_tilt() -> Quat {
    Quat::from_axis_angle(Vec3::new(1.0, 0.0, 1.0).normalize(), SATURN_TILT_RADIANS)
}

fn buddha<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    match BUDDHA.sample(rng) {
        BuddhaPart::Head => point_in_ball(rng, BUDDHA_HEAD_RADIUS) + Vec3::Y * BUDDHA_HEAD_LIFT,
        BuddhaPart::Body => {
            // cone-ish torso, narrowing with height
            let h = rng.gen::<f32>() * 3.0;
            let r = 1.5 * (1.0 - h / 3.5) + 0.2;
            let angle = rng.gen::<f32>() * TAU;
            Vec3::new(angle.cos() * r, h - 0.5, angle.sin() * r)
        }
        BuddhaPart::Base => {
            // crossed legs: torus with a five-lobed tube
            let angle = rng.gen::<f32>() * TAU;
            let r = 2.0 + rng.gen::<f32>() * 0.8;
            let tube = 0.8 * rng.gen::<f32>();
            let ring = r + tube * (angle * 5.0).cos();
            Vec3::new(
                ring * angle.cos(),
                tube * (angle * 5.0).sin() - 1.0,
                ring * angle.sin(),
            )
        }
    }
}

fn fireworks<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let r = FIREWORKS_RADIUS * (1.0 - rng.gen::<f32>().powi(4));
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    spherical(r, theta, phi)
}

fn christmas_tree<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    match TREE.sample(rng) {
        TreePart::Star => Vec3::new(
            centered(rng, TREE_STAR_JITTER),
            TREE_HEIGHT / 2.0 + rng.gen::<f32>() * TREE_STAR_RISE,
            centered(rng, TREE_STAR_JITTER),
        ),
        TreePart::Trunk => {
            let angle = rng.gen::<f32>() * TAU;
            let r = rng.gen::<f32>().sqrt() * TREE_TRUNK_RADIUS;
            Vec3::new(
                angle.cos() * r,
                -TREE_HEIGHT / 2.0 + rng.gen::<f32>() * TREE_TRUNK_HEIGHT,
                angle.sin() * r,
            )
        }
        TreePart::Foliage => {
            let layer = rng.gen_range(0..TREE_LAYERS);
            let h_in_layer = rng.gen::<f32>();
            let y = tree_layer_bottom(layer) + h_in_layer * (TREE_HEIGHT / TREE_LAYERS as f32);
            let r = tree_layer_radius(layer) * (1.0 - h_in_layer) * rng.gen::<f32>().sqrt();
            let angle = rng.gen::<f32>() * TAU;
            Vec3::new(angle.cos() * r, y, angle.sin() * r)
        }
    }
}

// ---------------- Tree profile ----------------

/// Height of the bottom of foliage layer `layer` (0 = lowest).
pub fn tree_layer_bottom(layer: usize) -> f32 {
    -TREE_HEIGHT / 2.0
        + TREE_TRUNK_HEIGHT
        + layer as f32 * (TREE_HEIGHT - TREE_TRUNK_HEIGHT) / TREE_LAYERS as f32
}

/// Base radius of foliage layer `layer`, shrinking linearly toward the top.
pub fn tree_layer_radius(layer: usize) -> f32 {
    let progress = layer as f32 / (TREE_LAYERS - 1) as f32;
    TREE_MAX_RADIUS * (1.0 - progress * TREE_LAYER_TAPER)
}
