pub mod constants;
pub mod error;
pub mod input;
pub mod params;

pub use error::{AssetError, TuningError};
pub use input::{Action, ControlInput, KeyState};
pub use params::{HullDimensions, Param, ParamChange, ParamSpec, PhysicalConstants, SceneConfig, PARAM_SPECS};
