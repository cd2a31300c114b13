use serde::{Deserialize, Serialize};

use crate::core::Vec3;
use crate::domain::constants::{MAX_WIND_YAW_RATE, WIND_YAW_COUPLING, WORLD_RIGHT};
use crate::systems::boat::BoatState;

/// Steady wind over the water.
///
/// `direction` is kept unit length; every mutation goes through
/// [`WindState::set_direction_and_speed`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindState {
    direction: Vec3,
    speed: f32,
}

/// Calm until the host sets a wind
impl Default for WindState {
    fn default() -> Self {
        Self { direction: Vec3::X, speed: 0.0 }
    }
}

impl WindState {
    pub fn new(direction: Vec3, speed: f32) -> Self {
        let mut wind = Self::default();
        wind.set_direction_and_speed(direction, speed);
        wind
    }

    /// Dead calm
    pub fn calm() -> Self {
        Self::default()
    }

    /// A degenerate direction keeps the previous one; bad speeds become calm.
    pub fn set_direction_and_speed(&mut self, direction: Vec3, speed: f32) {
        if let Some(dir) = direction.try_normalize() {
            self.direction = dir;
        }
        self.speed = if speed.is_finite() { speed.max(0.0) } else { 0.0 };
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Push the boat downwind and nudge its yaw rate by the crosswind
    pub fn apply_to(&self, boat: &mut BoatState, wind_force: f32) {
        boat.position += self.direction * (self.speed * wind_force);

        let nudge = self.direction.dot(WORLD_RIGHT) * self.speed * WIND_YAW_COUPLING;
        boat.velocity.rotational =
            (boat.velocity.rotational + nudge).clamp(-MAX_WIND_YAW_RATE, MAX_WIND_YAW_RATE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_renormalized() {
        let wind = WindState::new(Vec3::new(0.0, 0.0, 10.0), 2.0);
        assert!((wind.direction().length() - 1.0).abs() < 1e-6);
        assert_eq!(wind.speed(), 2.0);
    }

    #[test]
    fn zero_direction_keeps_previous() {
        let mut wind = WindState::new(Vec3::new(0.0, 0.0, 1.0), 1.0);
        wind.set_direction_and_speed(Vec3::zero(), 3.0);
        assert_eq!(wind.direction(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(wind.speed(), 3.0);
    }

    #[test]
    fn default_wind_leaves_boat_alone() {
        let mut boat = BoatState::at(Vec3::new(1.0, 2.0, 3.0), 0.5);
        WindState::default().apply_to(&mut boat, 0.5);
        assert_eq!(boat.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(boat.velocity.rotational, 0.0);
    }

    #[test]
    fn negative_speed_becomes_calm() {
        let wind = WindState::new(Vec3::X, -4.0);
        assert_eq!(wind.speed(), 0.0);
    }

    #[test]
    fn displaces_along_direction() {
        let wind = WindState::new(Vec3::new(0.0, 0.0, -1.0), 2.0);
        let mut boat = BoatState::at(Vec3::zero(), 0.0);
        wind.apply_to(&mut boat, 0.5);
        assert!((boat.position.z + 1.0).abs() < 1e-6);
        // Pure headwind along Z has no crosswind component.
        assert_eq!(boat.velocity.rotational, 0.0);
    }

    #[test]
    fn yaw_nudge_is_clamped_for_any_speed() {
        let wind = WindState::new(Vec3::X, 1.0e6);
        let mut boat = BoatState::at(Vec3::zero(), 0.0);
        for _ in 0..10 {
            wind.apply_to(&mut boat, 0.0);
            assert!(boat.velocity.rotational <= MAX_WIND_YAW_RATE);
        }
        assert_eq!(boat.velocity.rotational, MAX_WIND_YAW_RATE);

        let wind = WindState::new(Vec3::new(-1.0, 0.0, 0.0), 1.0e6);
        wind.apply_to(&mut boat, 0.0);
        assert_eq!(boat.velocity.rotational, -MAX_WIND_YAW_RATE);
    }
}
