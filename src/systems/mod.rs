pub mod audio;
pub mod boat;
pub mod camera;
pub mod water;
pub mod wind;
