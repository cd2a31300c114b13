use crate::systems::boat::BoatMotionModel;
use crate::systems::camera::ActiveCamera;

use super::SceneCore;

pub(super) fn key_down(scene: &mut SceneCore, code: &str) {
    if let Some(action) = scene.keys.key_down(code) {
        log::trace!("key down {code} -> {action:?}");
    }
}

pub(super) fn key_up(scene: &mut SceneCore, code: &str) {
    if let Some(action) = scene.keys.key_up(code) {
        log::trace!("key up {code} -> {action:?}");
    }
}

pub(super) fn orbit_rotate(scene: &mut SceneCore, d_azimuth: f32, d_polar: f32) {
    if scene.cameras.active() == ActiveCamera::Orbit {
        scene.cameras.orbit_mut().rotate(d_azimuth, d_polar);
    }
}

pub(super) fn orbit_zoom(scene: &mut SceneCore, factor: f32) {
    if scene.cameras.active() == ActiveCamera::Orbit {
        scene.cameras.orbit_mut().zoom(factor);
    }
}

pub(super) fn toggle_camera(scene: &mut SceneCore) -> ActiveCamera {
    let active = scene.cameras.toggle();
    log::info!("active camera: {active:?}");
    active
}

/// Publish the boat once its model is in the scene graph
pub(super) fn boat_loaded(scene: &mut SceneCore) -> bool {
    let published = scene.boat.publish(BoatMotionModel::new(scene.hull));
    if published {
        log::info!("boat model loaded");
        let pose = scene.boat_pose();
        scene.cameras.update(pose.as_ref());
    } else {
        log::warn!("ignoring duplicate boat load completion");
    }
    published
}

pub(super) fn boat_load_failed(scene: &mut SceneCore, reason: &str) -> bool {
    let recorded = scene.boat.fail(reason);
    if recorded {
        if let Some(err) = scene.boat.error() {
            log::warn!("{err}; boat ticks are disabled");
        }
    }
    recorded
}

/// New session: boat back at spawn, sinking cleared, inputs released
pub(super) fn respawn(scene: &mut SceneCore) {
    let Some(model) = scene.boat.get_mut() else {
        return;
    };
    model.respawn();
    scene.keys.release_all();
    scene.cues.clear();
    log::info!("boat respawned");
}

