//! Tidewater Engine - boat motion for the browser water scene
//!
//! The JS host owns rendering, model loading, sliders and audio. This crate
//! owns the state those read every frame.
//!
//! Architecture:
//! - core/        - Vec3 and numeric guards
//! - domain/      - Constants, tunables, input mapping, errors
//! - systems/     - Boat model, wind, cameras, water, audio cues
//! - simulation/  - Per-frame orchestration and the wasm facade

// Macros first so every module below can use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        // A second init (hot reload) finds the logger already installed.
        let _ = console_log::init_with_level(log::Level::Info);
    }

    web_sys::console::log_1(&"⛵ Tidewater engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{HullDimensions, PhysicalConstants, SceneConfig};
pub use simulation::{Scene, SceneCore};
pub use systems::boat::{BoatMotionModel, BoatPose, BoatState, MotionPhase};
pub use systems::wind::WindState;

// Audio cue ids for JS
#[wasm_bindgen]
pub fn cue_sinking() -> String { systems::audio::AudioCue::Sinking.id().to_string() }
