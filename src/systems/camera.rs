//! Camera rig: a free orbit camera and a chase camera locked to the boat
//!
//! The host owns the actual camera objects; we only produce poses.

use crate::core::Vec3;
use crate::systems::boat::BoatPose;

const ORBIT_START: Vec3 = Vec3 { x: 30.0, y: 30.0, z: 100.0 };
const ORBIT_MIN_DISTANCE: f32 = 40.0;
const ORBIT_MAX_DISTANCE: f32 = 200.0;
const ORBIT_MIN_POLAR: f32 = 0.01;
/// Keeps the orbit camera just above the horizon
const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI * 0.495;

const CHASE_START: Vec3 = Vec3 { x: 0.0, y: 10.0, z: 10.0 };
const CHASE_OFFSET: Vec3 = Vec3 { x: 0.0, y: 23.0, z: 3.0 };
const CHASE_LOOK_HEIGHT: f32 = 17.0;
const CHASE_PITCH: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
    /// Fixed pitch the host applies after `lookAt`
    pub pitch_override: Option<f32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveCamera {
    #[default]
    Orbit,
    Chase,
}

impl ActiveCamera {
    pub fn index(self) -> u32 {
        match self {
            ActiveCamera::Orbit => 0,
            ActiveCamera::Chase => 1,
        }
    }
}

/// Spherical orbit around a target (Y-up)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    target: Vec3,
    azimuth: f32,
    polar: f32,
    distance: f32,
}

impl OrbitCamera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length().clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        let polar = if offset.length() > 0.0 {
            (offset.y / offset.length()).clamp(-1.0, 1.0).acos()
        } else {
            ORBIT_MAX_POLAR
        };
        Self {
            target,
            azimuth: offset.x.atan2(offset.z),
            polar: polar.clamp(ORBIT_MIN_POLAR, ORBIT_MAX_POLAR),
            distance,
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn set_target(&mut self, target: Vec3) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Mouse drag
    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        if d_azimuth.is_finite() {
            self.azimuth += d_azimuth;
        }
        if d_polar.is_finite() {
            self.polar = (self.polar + d_polar).clamp(ORBIT_MIN_POLAR, ORBIT_MAX_POLAR);
        }
    }

    /// Wheel zoom; `factor < 1` moves in
    pub fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.distance = (self.distance * factor).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        }
    }

    pub fn position(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a) * self.distance
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position(),
            look_at: self.target,
            pitch_override: None,
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(ORBIT_START, Vec3::zero())
    }
}

/// Chase pose rigidly attached above and behind the boat
pub fn chase_pose(boat: &BoatPose) -> CameraPose {
    let p = boat.position;
    CameraPose {
        position: p + CHASE_OFFSET,
        look_at: Vec3::new(p.x, p.y + CHASE_LOOK_HEIGHT, p.z),
        pitch_override: Some(CHASE_PITCH),
    }
}

#[derive(Clone, Debug)]
pub struct CameraRig {
    orbit: OrbitCamera,
    chase: CameraPose,
    active: ActiveCamera,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            orbit: OrbitCamera::default(),
            chase: CameraPose {
                position: CHASE_START,
                look_at: Vec3::new(CHASE_START.x, CHASE_START.y, 0.0),
                pitch_override: Some(CHASE_PITCH),
            },
            active: ActiveCamera::Orbit,
        }
    }

    /// Follow the boat. No-op until the boat exists.
    pub fn update(&mut self, boat: Option<&BoatPose>) {
        let Some(boat) = boat else {
            return;
        };
        self.orbit.set_target(boat.position);
        self.chase = chase_pose(boat);
    }

    pub fn toggle(&mut self) -> ActiveCamera {
        self.active = match self.active {
            ActiveCamera::Orbit => ActiveCamera::Chase,
            ActiveCamera::Chase => ActiveCamera::Orbit,
        };
        self.active
    }

    pub fn active(&self) -> ActiveCamera {
        self.active
    }

    pub fn orbit(&self) -> &OrbitCamera {
        &self.orbit
    }

    pub fn orbit_mut(&mut self) -> &mut OrbitCamera {
        &mut self.orbit
    }

    pub fn orbit_pose(&self) -> CameraPose {
        self.orbit.pose()
    }

    pub fn chase_pose(&self) -> CameraPose {
        self.chase
    }

    pub fn active_pose(&self) -> CameraPose {
        match self.active {
            ActiveCamera::Orbit => self.orbit_pose(),
            ActiveCamera::Chase => self.chase,
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boat_at(x: f32, y: f32, z: f32) -> BoatPose {
        BoatPose { position: Vec3::new(x, y, z), yaw: 0.0, roll: 0.0 }
    }

    #[test]
    fn orbit_start_round_trips_position() {
        let cam = OrbitCamera::default();
        let p = cam.position();
        assert!((p.x - 30.0).abs() < 1e-3);
        assert!((p.y - 30.0).abs() < 1e-3);
        assert!((p.z - 100.0).abs() < 1e-3);
    }

    #[test]
    fn zoom_and_polar_are_clamped() {
        let mut cam = OrbitCamera::default();
        cam.zoom(0.01);
        assert_eq!(cam.distance(), ORBIT_MIN_DISTANCE);
        cam.zoom(1000.0);
        assert_eq!(cam.distance(), ORBIT_MAX_DISTANCE);
        cam.rotate(0.0, 10.0);
        assert_eq!(cam.polar(), ORBIT_MAX_POLAR);
        assert!(cam.position().y > cam.target().y);
    }

    #[test]
    fn rig_ignores_missing_boat() {
        let mut rig = CameraRig::new();
        let before = rig.chase_pose();
        rig.update(None);
        assert_eq!(rig.chase_pose(), before);
        assert_eq!(rig.orbit().target(), Vec3::zero());
    }

    #[test]
    fn chase_follows_boat() {
        let mut rig = CameraRig::new();
        rig.update(Some(&boat_at(5.0, 13.0, 50.0)));
        let chase = rig.chase_pose();
        assert_eq!(chase.position, Vec3::new(5.0, 36.0, 53.0));
        assert_eq!(chase.look_at, Vec3::new(5.0, 30.0, 50.0));
        assert_eq!(rig.orbit().target(), Vec3::new(5.0, 13.0, 50.0));
    }

    #[test]
    fn toggle_switches_active_pose() {
        let mut rig = CameraRig::new();
        assert_eq!(rig.active().index(), 0);
        assert_eq!(rig.toggle(), ActiveCamera::Chase);
        assert_eq!(rig.active_pose(), rig.chase_pose());
        assert_eq!(rig.toggle(), ActiveCamera::Orbit);
    }
}
