//! One explicit owner for all per-session animation state.
//!
//! Hosts keep a [`Sculpture`] and call [`Sculpture::tick`] from their frame
//! callback. Configuration changes from the presentation layer go through
//! [`Sculpture::apply_config`] (or the single-field helpers).

use crate::config::{Color, RenderConfig};
use crate::constants::DEFAULT_ORNAMENT_COUNT;
use crate::error::ConfigError;
use crate::morph::MorphEngine;
use crate::ornament::OrnamentController;
use crate::shapes::Archetype;
use crate::signal::ControlSignal;
use crate::state::FrameTime;
use crate::tracking::GestureTracker;

pub struct Sculpture {
    config: RenderConfig,
    morph: MorphEngine,
    ornaments: OrnamentController,
    tracker: GestureTracker,
}

impl Sculpture {
    pub fn new(config: RenderConfig, seed: u64) -> Self {
        Self::with_ornaments(config, seed, DEFAULT_ORNAMENT_COUNT)
    }

    pub fn with_ornaments(config: RenderConfig, seed: u64, ornament_count: usize) -> Self {
        log::info!(
            "[sculpture] {} points, {} ornaments, target {}",
            config.particle_count,
            ornament_count,
            config.archetype
        );
        Self {
            morph: MorphEngine::new(&config, seed),
            ornaments: OrnamentController::new(ornament_count),
            tracker: GestureTracker::new(),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Route a new configuration: a count change resets the buffers, an
    /// archetype change retargets, a color change reblends. A zero count is
    /// rejected and leaves the current configuration in place.
    pub fn apply_config(&mut self, config: RenderConfig) -> Result<(), ConfigError> {
        if config.particle_count == 0 {
            return Err(ConfigError::EmptyPointCloud);
        }
        self.route(config);
        Ok(())
    }

    // `config` is already known to be valid.
    fn route(&mut self, config: RenderConfig) {
        if config.particle_count != self.config.particle_count {
            self.morph.reset(config.particle_count);
        }
        if config.archetype != self.config.archetype {
            self.morph.set_target(config.archetype);
        }
        if config.primary_color != self.config.primary_color {
            self.morph.set_color(config.primary_color);
        }
        self.config = config;
    }

    pub fn select_archetype(&mut self, archetype: Archetype) {
        let next = self.config.clone().with_archetype(archetype);
        self.route(next);
    }

    pub fn select_color(&mut self, color: Color) {
        let next = self.config.clone().with_color(color);
        self.route(next);
    }

    pub fn set_particle_count(&mut self, count: usize) -> Result<(), ConfigError> {
        let next = self.config.clone().with_particle_count(count)?;
        self.route(next);
        Ok(())
    }

    /// Ornaments only show on the tree.
    pub fn ornaments_visible(&self) -> bool {
        self.config.archetype == Archetype::ChristmasTree
    }

    /// Advance one frame using the latest completed control signal.
    pub fn tick(&mut self, time: FrameTime) -> ControlSignal {
        let signal = self.tracker.latest();
        self.morph.update(time, &signal);
        let visible = self.ornaments_visible();
        self.ornaments.update(time, &signal, visible);
        signal
    }

    pub fn morph(&self) -> &MorphEngine {
        &self.morph
    }

    pub fn ornaments(&self) -> &OrnamentController {
        &self.ornaments
    }

    pub fn ornaments_mut(&mut self) -> &mut OrnamentController {
        &mut self.ornaments
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut GestureTracker {
        &mut self.tracker
    }
}
