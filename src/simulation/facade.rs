use wasm_bindgen::prelude::*;

use crate::core::Vec3;
use crate::systems::camera::CameraPose;

use super::perf_stats::PerfStats;
use super::SceneCore;

/// Flat camera pose for JS: position, look-at and optional fixed pitch
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct CameraView {
    x: f32,
    y: f32,
    z: f32,
    look_x: f32,
    look_y: f32,
    look_z: f32,
    pitch: Option<f32>,
}

impl From<CameraPose> for CameraView {
    fn from(pose: CameraPose) -> Self {
        Self {
            x: pose.position.x,
            y: pose.position.y,
            z: pose.position.z,
            look_x: pose.look_at.x,
            look_y: pose.look_at.y,
            look_z: pose.look_at.z,
            pitch: pose.pitch_override,
        }
    }
}

#[wasm_bindgen]
impl CameraView {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.x }
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.y }
    #[wasm_bindgen(getter)]
    pub fn z(&self) -> f32 { self.z }
    #[wasm_bindgen(getter)]
    pub fn look_x(&self) -> f32 { self.look_x }
    #[wasm_bindgen(getter)]
    pub fn look_y(&self) -> f32 { self.look_y }
    #[wasm_bindgen(getter)]
    pub fn look_z(&self) -> f32 { self.look_z }
    #[wasm_bindgen(getter)]
    pub fn pitch(&self) -> Option<f32> { self.pitch }
}

#[wasm_bindgen]
pub struct Scene {
    core: SceneCore,
}

#[wasm_bindgen]
impl Scene {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: SceneCore::new() }
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === TUNING ===

    /// Slider write. Returns the value actually applied (clamped and snapped).
    pub fn set_constant(&mut self, key: String, value: f64) -> Result<f32, JsValue> {
        let change = self
            .core
            .set_constant(&key, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(change.applied)
    }

    pub fn get_constant(&self, key: String) -> Option<f32> {
        crate::domain::Param::from_key(&key).map(|p| self.core.constants().get(p))
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn get_config_json(&self) -> String {
        self.core.config_json()
    }

    /// Slider manifest: `[{key, label, min, max, step, value, resyncsWater}]`
    pub fn get_parameters_json(&self) -> String {
        self.core.parameters_json()
    }

    pub fn set_wind(&mut self, dx: f32, dy: f32, dz: f32, speed: f32) {
        let mut wind = *self.core.wind();
        wind.set_direction_and_speed(Vec3::new(dx, dy, dz), speed);
        self.core.set_wind(wind);
    }

    #[wasm_bindgen(getter)]
    pub fn wind_speed(&self) -> f32 { self.core.wind().speed() }

    // === INPUT ===

    pub fn key_down(&mut self, code: String) {
        self.core.key_down(&code);
    }

    pub fn key_up(&mut self, code: String) {
        self.core.key_up(&code);
    }

    pub fn orbit_rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        self.core.orbit_rotate(d_azimuth, d_polar);
    }

    pub fn orbit_zoom(&mut self, factor: f32) {
        self.core.orbit_zoom(factor);
    }

    /// Returns the new active camera index (0 orbit, 1 chase)
    pub fn toggle_camera(&mut self) -> u32 {
        self.core.toggle_camera().index()
    }

    // === ASSETS ===

    pub fn boat_loaded(&mut self) -> bool {
        self.core.boat_loaded()
    }

    pub fn boat_load_failed(&mut self, reason: String) -> bool {
        self.core.boat_load_failed(&reason)
    }

    #[wasm_bindgen(getter)]
    pub fn boat_ready(&self) -> bool { self.core.boat().is_ready() }

    pub fn respawn(&mut self) {
        self.core.respawn();
    }

    // === STEP ===

    /// Advance one frame; `elapsed_ms` is host time since the scene started
    pub fn step(&mut self, elapsed_ms: f64) {
        self.core.step(elapsed_ms / 1000.0);
    }

    /// Advance one frame on the engine's own clock
    pub fn tick(&mut self) {
        self.core.tick();
    }

    // === RENDER READBACK ===

    #[wasm_bindgen(getter)]
    pub fn boat_x(&self) -> f32 { self.core.boat_pose().map_or(0.0, |p| p.position.x) }
    #[wasm_bindgen(getter)]
    pub fn boat_y(&self) -> f32 { self.core.boat_pose().map_or(0.0, |p| p.position.y) }
    #[wasm_bindgen(getter)]
    pub fn boat_z(&self) -> f32 { self.core.boat_pose().map_or(0.0, |p| p.position.z) }
    #[wasm_bindgen(getter)]
    pub fn boat_yaw(&self) -> f32 { self.core.boat_pose().map_or(0.0, |p| p.yaw) }
    #[wasm_bindgen(getter)]
    pub fn boat_roll(&self) -> f32 { self.core.boat_pose().map_or(0.0, |p| p.roll) }
    #[wasm_bindgen(getter)]
    pub fn sinking(&self) -> bool { self.core.is_sinking() }

    #[wasm_bindgen(getter)]
    pub fn active_camera(&self) -> u32 { self.core.active_camera().index() }

    pub fn orbit_camera(&self) -> CameraView {
        self.core.cameras().orbit_pose().into()
    }

    pub fn chase_camera(&self) -> CameraView {
        self.core.cameras().chase_pose().into()
    }

    pub fn active_camera_view(&self) -> CameraView {
        self.core.cameras().active_pose().into()
    }

    #[wasm_bindgen(getter)]
    pub fn water_distortion_scale(&self) -> f32 { self.core.water().distortion_scale }
    #[wasm_bindgen(getter)]
    pub fn water_time(&self) -> f32 { self.core.water().time }

    /// Pending audio cue id (`"sinking"`), handed out once
    pub fn take_audio_cue(&mut self) -> Option<String> {
        self.core.take_audio_cue().map(|cue| cue.id().to_string())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

