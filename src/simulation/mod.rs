//! Scene - per-frame orchestration of the boat, wind, cameras and water
//!
//! `SceneCore` owns every piece of mutable state; the host drives it with
//! one `step` per animation frame and reads poses back. Settings, commands
//! and the step itself live in their own files and are delegated to.

use crate::domain::{HullDimensions, KeyState, PhysicalConstants};
use crate::systems::audio::CueQueue;
use crate::systems::boat::BoatMotionModel;
use crate::systems::camera::CameraRig;
use crate::systems::water::WaterSurface;
use crate::systems::wind::WindState;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "assets/assets.rs"]
mod assets;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use assets::AssetSlot;
pub use facade::Scene;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

use crate::domain::{ParamChange, SceneConfig, TuningError};
use crate::systems::audio::AudioCue;
use crate::systems::boat::BoatPose;
use crate::systems::camera::ActiveCamera;

/// The scene state behind the wasm facade
pub struct SceneCore {
    constants: PhysicalConstants,
    hull: HullDimensions,
    wind: WindState,
    boat: AssetSlot<BoatMotionModel>,
    keys: KeyState,
    cameras: CameraRig,
    water: WaterSurface,
    cues: CueQueue,

    // State
    clock: PerfTimer,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SceneCore {
    pub fn new() -> Self {
        init::create_scene_core(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        init::create_scene_core(config)
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn constants(&self) -> &PhysicalConstants { &self.constants }

    pub fn hull(&self) -> HullDimensions { self.hull }

    pub fn wind(&self) -> &WindState { &self.wind }

    pub fn cameras(&self) -> &CameraRig { &self.cameras }

    pub fn water(&self) -> &WaterSurface { &self.water }

    pub fn boat(&self) -> &AssetSlot<BoatMotionModel> { &self.boat }

    // === SETTINGS ===

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Slider write by key (`"mass"`, `"waveAmplitude"`, ...)
    pub fn set_constant(&mut self, key: &str, value: f64) -> Result<ParamChange, TuningError> {
        settings::set_constant(self, key, value)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), TuningError> {
        settings::load_config_json(self, json)
    }

    pub fn config_json(&self) -> String {
        settings::config_json(self)
    }

    pub fn parameters_json(&self) -> String {
        self.constants.manifest_json()
    }

    pub fn set_hull(&mut self, hull: HullDimensions) {
        settings::set_hull(self, hull);
    }

    pub fn set_wind(&mut self, wind: WindState) {
        settings::set_wind(self, wind);
    }

    // === COMMANDS ===

    pub fn key_down(&mut self, code: &str) {
        commands::key_down(self, code);
    }

    pub fn key_up(&mut self, code: &str) {
        commands::key_up(self, code);
    }

    pub fn orbit_rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        commands::orbit_rotate(self, d_azimuth, d_polar);
    }

    pub fn orbit_zoom(&mut self, factor: f32) {
        commands::orbit_zoom(self, factor);
    }

    pub fn toggle_camera(&mut self) -> ActiveCamera {
        commands::toggle_camera(self)
    }

    /// Completion callback of the boat model load
    pub fn boat_loaded(&mut self) -> bool {
        commands::boat_loaded(self)
    }

    pub fn boat_load_failed(&mut self, reason: &str) -> bool {
        commands::boat_load_failed(self, reason)
    }

    pub fn respawn(&mut self) {
        commands::respawn(self);
    }

    pub fn take_audio_cue(&mut self) -> Option<AudioCue> {
        self.cues.take()
    }

    // === QUERIES ===

    /// `None` until the boat model has loaded
    pub fn boat_pose(&self) -> Option<BoatPose> {
        self.boat.get().map(|m| m.pose())
    }

    pub fn is_sinking(&self) -> bool {
        self.boat.get().is_some_and(|m| m.state().is_sinking())
    }

    pub fn active_camera(&self) -> ActiveCamera {
        self.cameras.active()
    }

    // === STEP ===

    /// Advance one frame at `t` seconds since the scene started
    pub fn step(&mut self, t: f64) {
        step::step(self, t);
    }

    /// Advance one frame using the scene's own clock
    pub fn tick(&mut self) {
        let t = self.clock.elapsed_secs();
        step::step(self, t);
    }
}

impl Default for SceneCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
