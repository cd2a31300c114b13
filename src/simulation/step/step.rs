use super::{PerfTimer, SceneCore};

pub(super) fn step(scene: &mut SceneCore, t: f64) {
    let perf_on = scene.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    for _ in 0..scene.keys.take_camera_toggles() {
        scene.toggle_camera();
    }

    // === BOAT ===
    // Skipped entirely until the loader has published the boat.
    let input = scene.keys.snapshot();
    let boat_start = if perf_on { Some(PerfTimer::start()) } else { None };
    if let Some(model) = scene.boat.get_mut() {
        let report = model.update(&input, &scene.wind, &scene.constants, t);
        if let Some(cue) = report.cue {
            log::info!("audio cue: {}", cue.id());
            scene.cues.push(cue);
        }
        if perf_on {
            scene.perf_stats.ticks += 1;
            if model.state().is_sinking() {
                scene.perf_stats.sinking_ticks += 1;
            }
        }
    }
    // Release edges are consumed whether or not a boat saw them.
    scene.keys.end_tick();
    if let Some(t0) = boat_start {
        scene.perf_stats.boat_ms = t0.elapsed_ms();
    }

    // === CAMERAS ===
    let camera_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let pose = scene.boat_pose();
    scene.cameras.update(pose.as_ref());
    if let Some(t0) = camera_start {
        scene.perf_stats.camera_ms = t0.elapsed_ms();
    }

    scene.water.advance_frame();
    scene.frame += 1;

    if let Some(t0) = step_start {
        scene.perf_stats.step_ms = t0.elapsed_ms();
    }
}
