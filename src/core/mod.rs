//! Core math and numeric guards shared by every system

#[path = "utils/safety.rs"]
#[macro_use]
pub mod safety;

#[path = "math/vec3.rs"]
pub mod vec3;

pub use vec3::Vec3;
