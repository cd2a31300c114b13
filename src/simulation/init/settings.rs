use crate::domain::{HullDimensions, ParamChange, SceneConfig, TuningError};
use crate::systems::wind::WindState;

use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
    scene.perf_stats.reset();
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> PerfStats {
    scene.perf_stats.clone()
}

pub(super) fn set_constant(scene: &mut SceneCore, key: &str, value: f64) -> Result<ParamChange, TuningError> {
    let change = scene.constants.set_by_key(key, value).map_err(|e| {
        log::warn!("rejected parameter write: {e}");
        e
    })?;
    log::debug!("{key} = {}", change.applied);
    if change.resyncs_water {
        scene.water.sync_waves(&scene.constants);
    }
    Ok(change)
}

pub(super) fn load_config_json(scene: &mut SceneCore, json: &str) -> Result<(), TuningError> {
    let config = SceneConfig::from_json(json)?;
    scene.constants = config.constants;
    scene.water.sync_waves(&scene.constants);
    set_hull(scene, config.hull);
    log::info!("scene config loaded");
    Ok(())
}

pub(super) fn config_json(scene: &SceneCore) -> String {
    SceneConfig { constants: scene.constants, hull: scene.hull }.to_json()
}

pub(super) fn set_hull(scene: &mut SceneCore, hull: HullDimensions) {
    scene.hull = hull.sanitized();
    if let Some(model) = scene.boat.get_mut() {
        model.set_hull(scene.hull);
    }
}

pub(super) fn set_wind(scene: &mut SceneCore, wind: WindState) {
    scene.wind = wind;
}
