use crate::domain::constants::WATER_TIME_STEP;
use crate::domain::PhysicalConstants;

/// Water shader uniforms the host copies into its material each frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaterSurface {
    pub distortion_scale: f32,
    pub time: f32,
}

impl Default for WaterSurface {
    fn default() -> Self {
        Self { distortion_scale: 3.7, time: 0.0 }
    }
}

impl WaterSurface {
    /// Hook for the wave sliders: amplitude drives distortion, frequency resets the clock
    pub fn sync_waves(&mut self, constants: &PhysicalConstants) {
        self.distortion_scale = constants.wave_amplitude;
        self.time = constants.wave_frequency;
    }

    pub fn advance_frame(&mut self) {
        self.time += WATER_TIME_STEP;
    }
}
