use crate::core::safety::sign;
use crate::core::Vec3;
use crate::domain::constants::{
    BASE_DRAFT, CENTRIFUGAL_DISPLACEMENT, HEAVE_DAMPING, MAX_HEAVE, MIN_DRAFT, REVERSE_SPEED,
    SINK_INCREMENT, STOP_EPSILON, TERMINAL_DEPTH, TURN_ANGULAR_VELOCITY, TURN_RADIUS, TURN_RATE,
};
use crate::domain::{ControlInput, HullDimensions, PhysicalConstants};
use crate::systems::audio::AudioCue;
use crate::systems::wind::WindState;

use super::forces;
use super::state::{BoatPose, BoatState, MotionPhase};

/// Outcome of one tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    pub pose: BoatPose,
    /// Set on exactly one tick per session: the first sinking tick
    pub cue: Option<AudioCue>,
}

/// Fixed-step boat physics.
///
/// Owns the `BoatState`; nothing else mutates it. Constants are passed in
/// each tick and sanitized before use, so the tuning surface can change
/// them between any two ticks.
#[derive(Clone, Debug)]
pub struct BoatMotionModel {
    state: BoatState,
    hull: HullDimensions,
}

impl BoatMotionModel {
    pub fn new(hull: HullDimensions) -> Self {
        Self::with_state(BoatState::spawn(), hull)
    }

    pub fn with_state(state: BoatState, hull: HullDimensions) -> Self {
        Self { state, hull: hull.sanitized() }
    }

    pub fn state(&self) -> &BoatState {
        &self.state
    }

    pub fn hull(&self) -> HullDimensions {
        self.hull
    }

    pub fn set_hull(&mut self, hull: HullDimensions) {
        self.hull = hull.sanitized();
    }

    pub fn pose(&self) -> BoatPose {
        self.state.pose()
    }

    /// Start a fresh session at the spawn pose
    pub fn respawn(&mut self) {
        self.state = BoatState::spawn();
    }

    /// Advance one visual tick. `t` is wall-clock seconds since start.
    pub fn update(
        &mut self,
        input: &ControlInput,
        wind: &WindState,
        constants: &PhysicalConstants,
        t: f64,
    ) -> StepReport {
        let c = constants.sanitized();
        let t = finite_or!(t, 0.0);

        if self.state.is_sinking() {
            return self.sink();
        }

        self.apply_controls(input);
        self.integrate_speed(input, &c);

        // Wave bob replaces the height every tick.
        self.state.position.y = BASE_DRAFT + forces::wave_offset(t, &c);

        wind.apply_to(&mut self.state, c.wind_force);
        self.apply_centrifugal_tilt(&c);

        if c.mass > c.sinking_threshold {
            let net = forces::net_vertical_force(&self.hull, self.state.position.y, c.mass);
            if net < 0.0 {
                log::info!("boat lost buoyancy (net force {net:.1}), sinking");
                self.state.phase = MotionPhase::Sinking { elapsed: 0.0, cue_emitted: false };
                return self.sink();
            }
            self.apply_heave(net, c.mass);
        } else {
            self.state.heave = 0.0;
        }

        let s = &mut self.state;
        s.yaw += s.velocity.rotational;
        let heading = s.heading();
        s.position += heading * s.velocity.linear;

        StepReport { pose: s.pose(), cue: None }
    }

    /// Key edges and held keys, applied before the forces.
    fn apply_controls(&mut self, input: &ControlInput) {
        let s = &mut self.state;

        if input.forward_released {
            s.phase = MotionPhase::Stopping;
        }
        if input.turn_released {
            s.velocity.rotational = 0.0;
        }
        if input.forward {
            s.phase = MotionPhase::Sailing;
        }
        if input.reverse {
            s.velocity.linear = -REVERSE_SPEED;
            s.phase = MotionPhase::Sailing;
        }
        if input.turn_left {
            s.velocity.rotational = TURN_RATE;
        }
        if input.turn_right {
            s.velocity.rotational = -TURN_RATE;
        }

        if input.turning() {
            s.angular_velocity = TURN_ANGULAR_VELOCITY;
            s.turn_radius = TURN_RADIUS;
        } else {
            s.angular_velocity = 0.0;
            s.turn_radius = 0.0;
        }
    }

    /// Thrust, drag, reaction damping, then stop-deceleration.
    fn integrate_speed(&mut self, input: &ControlInput, c: &PhysicalConstants) {
        let s = &mut self.state;
        let vel = s.velocity.linear;

        let thrust = if input.forward { forces::thrust_acceleration(c) } else { 0.0 };
        let drag = forces::drag_acceleration(vel, c);
        let reaction = forces::reaction_acceleration(vel, c);
        s.velocity.linear = vel + thrust + drag + reaction;

        if s.phase == MotionPhase::Stopping {
            s.velocity.linear *= c.deceleration_rate;
            if s.velocity.linear.abs() < STOP_EPSILON {
                s.velocity.linear = 0.0;
                s.phase = MotionPhase::Sailing;
            }
        }
    }

    fn apply_centrifugal_tilt(&mut self, c: &PhysicalConstants) {
        let s = &mut self.state;
        if s.angular_velocity > 0.0 && s.turn_radius > 0.0 {
            let force = forces::centrifugal_force(c.mass, s.angular_velocity, s.turn_radius);
            let turn_sign = sign(s.velocity.rotational);
            // Outward of the turn is the boat's local +Z for a left turn.
            let outward = Vec3::new(0.0, 0.0, 1.0).rotate_y(s.yaw) * turn_sign;
            s.position += outward * (force * CENTRIFUGAL_DISPLACEMENT);
            s.roll = forces::tilt_angle(s.angular_velocity, s.turn_radius) * turn_sign;
        } else {
            s.roll = 0.0;
        }
    }

    fn apply_heave(&mut self, net: f32, mass: f32) {
        let s = &mut self.state;
        let damped = net - HEAVE_DAMPING * s.heave * s.heave;
        s.heave = (s.heave + damped / mass).clamp(-MAX_HEAVE, MAX_HEAVE);
        s.position.y = (s.position.y + s.heave).max(MIN_DRAFT);
    }

    /// Descent routine; the only thing that runs once sinking.
    fn sink(&mut self) -> StepReport {
        let s = &mut self.state;
        let mut cue = None;

        if let MotionPhase::Sinking { elapsed, cue_emitted } = &mut s.phase {
            if !*cue_emitted {
                *cue_emitted = true;
                cue = Some(AudioCue::Sinking);
            }
            if s.position.y > TERMINAL_DEPTH {
                *elapsed += SINK_INCREMENT;
                s.position.y -= *elapsed;
            }
            if s.position.y <= TERMINAL_DEPTH || !s.position.y.is_finite() {
                s.position.y = TERMINAL_DEPTH;
                s.velocity.linear = 0.0;
                s.velocity.rotational = 0.0;
                s.heave = 0.0;
            }
        }

        StepReport { pose: s.pose(), cue }
    }
}

impl Default for BoatMotionModel {
    fn default() -> Self {
        Self::new(HullDimensions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm_model() -> (BoatMotionModel, WindState, PhysicalConstants) {
        let model = BoatMotionModel::with_state(BoatState::at(Vec3::new(0.0, 13.0, 0.0), 0.0), HullDimensions::default());
        (model, WindState::calm(), PhysicalConstants::default())
    }

    fn forward() -> ControlInput {
        ControlInput { forward: true, ..Default::default() }
    }

    #[test]
    fn thrust_accelerates_from_rest() {
        let (mut model, wind, c) = calm_model();
        model.update(&forward(), &wind, &c, 0.0);
        // thrust/mass = 0.1 on the first tick, no drag at rest
        assert!((model.state().velocity.linear - 0.1).abs() < 1e-6);
    }

    #[test]
    fn moves_along_heading() {
        let (mut model, wind, c) = calm_model();
        model.update(&forward(), &wind, &c, 0.0);
        let p = model.state().position;
        assert!((p.x - 0.1).abs() < 1e-6);
        assert!(p.z.abs() < 1e-6);
    }

    #[test]
    fn forward_release_enters_stopping_and_snaps_to_rest() {
        let (mut model, wind, c) = calm_model();
        for _ in 0..20 {
            model.update(&forward(), &wind, &c, 0.0);
        }
        let release = ControlInput { forward_released: true, ..Default::default() };
        model.update(&release, &wind, &c, 0.0);
        assert!(model.state().is_stopping());

        let idle = ControlInput::default();
        let mut ticks = 0;
        while model.state().is_stopping() {
            model.update(&idle, &wind, &c, 0.0);
            ticks += 1;
            assert!(ticks < 10_000);
        }
        assert_eq!(model.state().velocity.linear, 0.0);
        assert_eq!(model.state().phase, MotionPhase::Sailing);
    }

    #[test]
    fn pressing_forward_cancels_stopping() {
        let (mut model, wind, c) = calm_model();
        model.update(&forward(), &wind, &c, 0.0);
        let release = ControlInput { forward_released: true, ..Default::default() };
        model.update(&release, &wind, &c, 0.0);
        assert!(model.state().is_stopping());
        model.update(&forward(), &wind, &c, 0.0);
        assert!(!model.state().is_stopping());
    }

    #[test]
    fn reverse_sets_fixed_backward_speed() {
        let (mut model, wind, c) = calm_model();
        let reverse = ControlInput { reverse: true, ..Default::default() };
        model.update(&reverse, &wind, &c, 0.0);
        // -1 then one tick of drag/reaction: -1 + 0.0005 + 0.01
        assert!((model.state().velocity.linear + 0.9895).abs() < 1e-5);
    }

    #[test]
    fn turning_tilts_and_release_zeroes_yaw_rate() {
        let (mut model, wind, c) = calm_model();
        let left = ControlInput { turn_left: true, ..Default::default() };
        model.update(&left, &wind, &c, 0.0);
        assert!((model.state().yaw - 0.01).abs() < 1e-6);
        assert!(model.state().roll > 0.0);

        let right = ControlInput { turn_right: true, ..Default::default() };
        model.update(&right, &wind, &c, 0.0);
        assert!(model.state().roll < 0.0);

        let release = ControlInput { turn_released: true, ..Default::default() };
        model.update(&release, &wind, &c, 0.0);
        assert_eq!(model.state().velocity.rotational, 0.0);
        assert_eq!(model.state().roll, 0.0);
    }

    #[test]
    fn heavy_boat_sinks_and_emits_cue_once() {
        let (mut model, wind, mut c) = calm_model();
        c.mass = 300.0;
        c.sinking_threshold = 250.0;

        let first = model.update(&ControlInput::default(), &wind, &c, 0.0);
        assert!(model.state().is_sinking());
        assert_eq!(first.cue, Some(AudioCue::Sinking));

        let cues = (0..50)
            .filter_map(|_| model.update(&ControlInput::default(), &wind, &c, 0.0).cue)
            .count();
        assert_eq!(cues, 0);
    }

    #[test]
    fn light_boat_never_sinks() {
        let (mut model, wind, c) = calm_model();
        for i in 0..100 {
            model.update(&forward(), &wind, &c, i as f64 / 60.0);
        }
        assert!(!model.state().is_sinking());
    }

    #[test]
    fn buoyant_hull_heaves_instead_of_sinking() {
        // Hull tall enough to sit in the water at the base draft.
        let hull = HullDimensions { length: 5.0, width: 5.0, height: 14.0 };
        let mut model = BoatMotionModel::with_state(BoatState::at(Vec3::new(0.0, 13.0, 0.0), 0.0), hull);
        let mut c = PhysicalConstants::default();
        c.mass = 300.0;
        c.sinking_threshold = 250.0;

        model.update(&ControlInput::default(), &WindState::calm(), &c, 0.0);
        assert!(!model.state().is_sinking());
        assert!(model.state().heave > 0.0);
        assert!(model.state().heave <= MAX_HEAVE);
    }

    #[test]
    fn respawn_leaves_sinking() {
        let (mut model, wind, mut c) = calm_model();
        c.mass = 400.0;
        c.sinking_threshold = 100.0;
        model.update(&ControlInput::default(), &wind, &c, 0.0);
        assert!(model.state().is_sinking());

        model.respawn();
        assert!(!model.state().is_sinking());
        assert_eq!(model.state().sinking_elapsed(), 0.0);
    }

    #[test]
    fn non_finite_time_is_treated_as_zero() {
        let (mut model, wind, mut c) = calm_model();
        c.wave_amplitude = 5.0;
        c.mass = 300.0;
        c.sinking_threshold = 250.0;
        model.update(&ControlInput::default(), &wind, &c, f64::NAN);
        assert!(model.state().is_sinking());
        assert!(model.state().position.y.is_finite());

        for i in 0..200 {
            model.update(&ControlInput::default(), &wind, &c, i as f64 / 60.0);
            assert!(model.state().position.y.is_finite());
        }
        assert_eq!(model.state().position.y, TERMINAL_DEPTH);
    }

    #[test]
    fn sinking_from_nan_height_lands_at_terminal_depth() {
        let mut state = BoatState::at(Vec3::new(0.0, f32::NAN, 0.0), 0.0);
        state.phase = MotionPhase::Sinking { elapsed: 0.0, cue_emitted: true };
        let mut model = BoatMotionModel::with_state(state, HullDimensions::default());

        let report = model.update(&ControlInput::default(), &WindState::calm(), &PhysicalConstants::default(), 0.0);
        assert_eq!(report.pose.position.y, TERMINAL_DEPTH);
        assert_eq!(report.cue, None);
    }
}
