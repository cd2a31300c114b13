//! Fixed scene constants
//!
//! These are not exposed on the tuning surface. Tunables live in
//! `params::PhysicalConstants`.

use crate::core::Vec3;

/// Gravitational acceleration (m/s²)
pub const GRAVITY: f32 = 9.81;
/// Density of water (kg/m³)
pub const WATER_DENSITY: f32 = 1000.0;

/// Resting height of the boat origin above the water plane
pub const BASE_DRAFT: f32 = 13.0;
/// Lowest the buoyancy branch may push the boat
pub const MIN_DRAFT: f32 = 0.0;
/// Where a sunk boat comes to rest
pub const TERMINAL_DEPTH: f32 = -100.0;
/// Added to the sink accumulator every sinking tick (one visual frame)
pub const SINK_INCREMENT: f32 = 1.0 / 60.0;
/// Quadratic damping on heave velocity
pub const HEAVE_DAMPING: f32 = 0.05;
/// Heave speed cap (units per tick)
pub const MAX_HEAVE: f32 = 1.0;

/// Velocity below which a stopping boat snaps to rest
pub const STOP_EPSILON: f32 = 0.01;
/// Speed set while reverse is held
pub const REVERSE_SPEED: f32 = 1.0;

/// Yaw rate while a turn key is held
pub const TURN_RATE: f32 = 0.01;
/// Nominal angular velocity while turning (tilt only)
pub const TURN_ANGULAR_VELOCITY: f32 = 0.01;
/// Nominal turn radius while turning (tilt only)
pub const TURN_RADIUS: f32 = 20.0;
/// Scale from centrifugal force to lateral displacement
pub const CENTRIFUGAL_DISPLACEMENT: f32 = 0.001;
/// Scale from `ω·r` to roll angle
pub const TILT_FACTOR: f32 = 0.1;
/// Roll never exceeds 30°
pub const MAX_TILT: f32 = std::f32::consts::FRAC_PI_6;

/// Wind → yaw-rate coupling
pub const WIND_YAW_COUPLING: f32 = 0.0001;
/// Wind never pushes yaw rate past this
pub const MAX_WIND_YAW_RATE: f32 = 0.02;
/// Axis the wind's lateral component is measured against
pub const WORLD_RIGHT: Vec3 = Vec3::X;

/// Spawn pose of the boat
pub const SPAWN_POSITION: Vec3 = Vec3 { x: 5.0, y: BASE_DRAFT, z: 50.0 };
pub const SPAWN_YAW: f32 = 1.5;

/// Water shader clock advance per rendered frame
pub const WATER_TIME_STEP: f32 = 1.0 / 60.0;
