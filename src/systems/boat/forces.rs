use crate::core::safety::sign;
use crate::domain::constants::{GRAVITY, MAX_TILT, TILT_FACTOR, WATER_DENSITY};
use crate::domain::{HullDimensions, PhysicalConstants};

/// Engine acceleration while forward is held
#[inline(always)]
pub fn thrust_acceleration(c: &PhysicalConstants) -> f32 {
    c.thrust_force / c.mass
}

/// Quadratic drag, always opposing the current velocity
#[inline(always)]
pub fn drag_acceleration(vel: f32, c: &PhysicalConstants) -> f32 {
    -sign(vel) * 0.5 * c.drag_coefficient * vel * vel / c.mass
}

/// Linear water-reaction damping
#[inline(always)]
pub fn reaction_acceleration(vel: f32, c: &PhysicalConstants) -> f32 {
    -vel * c.water_reaction_force
}

/// Vertical wave offset at `t` seconds since start (bounded by the amplitude)
#[inline]
pub fn wave_offset(t: f64, c: &PhysicalConstants) -> f32 {
    ((t * c.wave_frequency as f64).sin() as f32) * c.wave_amplitude
}

#[inline]
pub fn centrifugal_force(mass: f32, angular_velocity: f32, turn_radius: f32) -> f32 {
    mass * angular_velocity * angular_velocity * turn_radius
}

/// Magnitude of the lean into a turn, capped at 30°
#[inline]
pub fn tilt_angle(angular_velocity: f32, turn_radius: f32) -> f32 {
    (angular_velocity * turn_radius * TILT_FACTOR).min(MAX_TILT)
}

/// Buoyancy minus weight with the hull origin at height `y`.
///
/// Negative means the water can no longer hold the boat up.
#[inline]
pub fn net_vertical_force(hull: &HullDimensions, y: f32, mass: f32) -> f32 {
    let buoyancy = WATER_DENSITY * hull.submerged_volume(y) * GRAVITY;
    buoyancy - mass * GRAVITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_is_zero_at_rest_and_opposes_motion() {
        let c = PhysicalConstants::default();
        assert_eq!(drag_acceleration(0.0, &c), 0.0);
        assert!(drag_acceleration(2.0, &c) < 0.0);
        assert!(drag_acceleration(-2.0, &c) > 0.0);
        // 0.5 * 0.1 * 4 / 100
        assert!((drag_acceleration(2.0, &c) + 0.002).abs() < 1e-7);
    }

    #[test]
    fn wave_offset_stays_within_amplitude() {
        let c = PhysicalConstants { wave_amplitude: 4.0, wave_frequency: 3.0, ..Default::default() };
        for i in 0..200 {
            let off = wave_offset(i as f64 * 0.137, &c);
            assert!(off.abs() <= 4.0 + 1e-5);
        }
    }

    #[test]
    fn tilt_is_capped() {
        assert!((tilt_angle(0.01, 20.0) - 0.02).abs() < 1e-6);
        assert_eq!(tilt_angle(10.0, 100.0), MAX_TILT);
    }

    #[test]
    fn floating_hull_has_negative_net_force_when_dry() {
        let hull = HullDimensions::default();
        assert!(net_vertical_force(&hull, 13.0, 300.0) < 0.0);
        assert!(net_vertical_force(&hull, 0.0, 300.0) > 0.0);
    }
}
