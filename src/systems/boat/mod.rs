//! Boat motion model
//!
//! The boat is a single body driven by hand-rolled forces:
//! thrust and quadratic drag along the heading, linear water reaction,
//! a wave bob on the vertical axis, wind drift, a centrifugal lean while
//! turning and a buoyancy check that can tip the boat into sinking.

mod forces;
mod motion;
mod state;

pub use forces::{
    centrifugal_force, drag_acceleration, net_vertical_force, reaction_acceleration, thrust_acceleration,
    tilt_angle, wave_offset,
};
pub use motion::{BoatMotionModel, StepReport};
pub use state::{BoatPose, BoatState, MotionPhase, Velocity};
