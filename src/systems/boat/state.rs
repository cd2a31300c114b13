use crate::core::Vec3;
use crate::domain::constants::{SPAWN_POSITION, SPAWN_YAW};

/// Where the boat is in its motion lifecycle.
///
/// `Sinking` is terminal: nothing but a respawn leaves it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionPhase {
    /// Free running (thrusting or coasting)
    Sailing,
    /// Forward released, decaying toward rest
    Stopping,
    /// Buoyancy lost; `elapsed` drives the descent rate
    Sinking { elapsed: f32, cue_emitted: bool },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    /// Forward speed along the heading (units per tick)
    pub linear: f32,
    /// Yaw rate (radians per tick)
    pub rotational: f32,
}

/// What the renderer needs to place the boat
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoatPose {
    pub position: Vec3,
    pub yaw: f32,
    pub roll: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoatState {
    pub position: Vec3,
    pub yaw: f32,
    pub roll: f32,
    pub velocity: Velocity,
    /// Only non-zero while a turn key is held (feeds the tilt)
    pub angular_velocity: f32,
    pub turn_radius: f32,
    /// Vertical velocity from the buoyancy branch
    pub heave: f32,
    pub phase: MotionPhase,
}

impl BoatState {
    pub fn spawn() -> Self {
        Self::at(SPAWN_POSITION, SPAWN_YAW)
    }

    pub fn at(position: Vec3, yaw: f32) -> Self {
        Self {
            position,
            yaw,
            roll: 0.0,
            velocity: Velocity::default(),
            angular_velocity: 0.0,
            turn_radius: 0.0,
            heave: 0.0,
            phase: MotionPhase::Sailing,
        }
    }

    pub fn is_sinking(&self) -> bool {
        matches!(self.phase, MotionPhase::Sinking { .. })
    }

    pub fn is_stopping(&self) -> bool {
        self.phase == MotionPhase::Stopping
    }

    pub fn sinking_elapsed(&self) -> f32 {
        match self.phase {
            MotionPhase::Sinking { elapsed, .. } => elapsed,
            _ => 0.0,
        }
    }

    /// Unit vector the boat moves along (local +X rotated by yaw)
    pub fn heading(&self) -> Vec3 {
        Vec3::X.rotate_y(self.yaw)
    }

    pub fn pose(&self) -> BoatPose {
        BoatPose {
            position: self.position,
            yaw: self.yaw,
            roll: self.roll,
        }
    }
}

impl Default for BoatState {
    fn default() -> Self {
        Self::spawn()
    }
}
