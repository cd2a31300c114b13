use crate::domain::{KeyState, SceneConfig};
use crate::systems::audio::CueQueue;
use crate::systems::camera::CameraRig;
use crate::systems::water::WaterSurface;
use crate::systems::wind::WindState;

use super::assets::AssetSlot;
use super::perf_stats::PerfStats;
use super::{PerfTimer, SceneCore};

pub(super) fn create_scene_core(config: SceneConfig) -> SceneCore {
    let constants = config.constants.sanitized();
    let mut water = WaterSurface::default();
    if constants.wave_amplitude > 0.0 {
        water.sync_waves(&constants);
    }

    SceneCore {
        constants,
        hull: config.hull.sanitized(),
        wind: WindState::calm(),
        // The boat appears once the host's loader calls back.
        boat: AssetSlot::Pending,
        keys: KeyState::new(),
        cameras: CameraRig::new(),
        water,
        cues: CueQueue::new(),
        clock: PerfTimer::start(),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
