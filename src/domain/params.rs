//! Tunable physical constants and the slider table that bounds them
//!
//! The host's GUI panel writes into a single owned `PhysicalConstants`
//! through [`PhysicalConstants::set`], which enforces the documented range
//! and step of every slider. The model reads [`PhysicalConstants::sanitized`]
//! once per tick, so a value that slipped in some other way (JSON, direct
//! field access) still cannot push NaN through the integrator.

use serde::{Deserialize, Serialize};

use super::error::TuningError;
use crate::core::safety::clamp_finite;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicalConstants {
    pub thrust_force: f32,
    pub drag_coefficient: f32,
    pub water_reaction_force: f32,
    pub mass: f32,
    pub deceleration_rate: f32,
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
    pub wind_force: f32,
    pub sinking_threshold: f32,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            thrust_force: 10.0,
            drag_coefficient: 0.1,
            water_reaction_force: 0.01,
            mass: 100.0,
            deceleration_rate: 0.98,
            wave_amplitude: 0.0,
            wave_frequency: 1.0,
            wind_force: 0.05,
            sinking_threshold: 300.0,
        }
    }
}

/// Physical hull size used for displaced volume. Independent of the render scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullDimensions {
    pub length: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for HullDimensions {
    fn default() -> Self {
        Self { length: 5.0, width: 5.0, height: 5.2 }
    }
}

impl HullDimensions {
    pub fn sanitized(&self) -> Self {
        let d = Self::default();
        let pick = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        Self {
            length: pick(self.length, d.length),
            width: pick(self.width, d.width),
            height: pick(self.height, d.height),
        }
    }

    /// Volume below the waterline when the hull origin sits at `y`
    pub fn submerged_volume(&self, y: f32) -> f32 {
        (self.height - y).max(0.0) * self.length * self.width
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    ThrustForce,
    DragCoefficient,
    WaterReactionForce,
    Mass,
    DecelerationRate,
    WaveAmplitude,
    WaveFrequency,
    WindForce,
    SinkingThreshold,
}

/// One slider on the tuning surface
#[derive(Clone, Copy, Debug)]
pub struct ParamSpec {
    pub param: Param,
    pub key: &'static str,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    /// Changing this must re-sync the water shader
    pub resyncs_water: bool,
}

pub const PARAM_SPECS: [ParamSpec; 9] = [
    ParamSpec { param: Param::ThrustForce, key: "thrustForce", label: "Thrust Force", min: 0.0, max: 50.0, step: 0.1, resyncs_water: false },
    ParamSpec { param: Param::DragCoefficient, key: "dragCoefficient", label: "Drag Coefficient", min: 0.0, max: 2.0, step: 0.01, resyncs_water: false },
    ParamSpec { param: Param::WaterReactionForce, key: "waterReactionForce", label: "Water Reaction Force", min: 0.0, max: 0.1, step: 0.001, resyncs_water: false },
    ParamSpec { param: Param::Mass, key: "mass", label: "Boat Mass", min: 30.0, max: 500.0, step: 1.0, resyncs_water: false },
    ParamSpec { param: Param::DecelerationRate, key: "decelerationRate", label: "Deceleration Rate", min: 0.9, max: 1.0, step: 0.001, resyncs_water: false },
    ParamSpec { param: Param::WaveAmplitude, key: "waveAmplitude", label: "Wave Amplitude", min: 0.0, max: 40.0, step: 0.1, resyncs_water: true },
    ParamSpec { param: Param::WaveFrequency, key: "waveFrequency", label: "Wave Frequency", min: 0.0, max: 5.0, step: 0.1, resyncs_water: true },
    ParamSpec { param: Param::WindForce, key: "windForce", label: "Wind Force", min: 0.0, max: 0.5, step: 0.01, resyncs_water: false },
    ParamSpec { param: Param::SinkingThreshold, key: "sinkingThreshold", label: "Sinking Threshold", min: 100.0, max: 500.0, step: 1.0, resyncs_water: false },
];

impl Param {
    pub fn spec(self) -> &'static ParamSpec {
        // Table order matches declaration order.
        &PARAM_SPECS[self as usize]
    }

    pub fn from_key(key: &str) -> Option<Param> {
        PARAM_SPECS.iter().find(|s| s.key == key).map(|s| s.param)
    }
}

impl ParamSpec {
    /// Clamp to range and snap to the slider step
    pub fn quantize(&self, value: f32) -> f32 {
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

/// Result of a successful slider write
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamChange {
    pub param: Param,
    pub applied: f32,
    pub resyncs_water: bool,
}

impl PhysicalConstants {
    pub fn get(&self, param: Param) -> f32 {
        match param {
            Param::ThrustForce => self.thrust_force,
            Param::DragCoefficient => self.drag_coefficient,
            Param::WaterReactionForce => self.water_reaction_force,
            Param::Mass => self.mass,
            Param::DecelerationRate => self.deceleration_rate,
            Param::WaveAmplitude => self.wave_amplitude,
            Param::WaveFrequency => self.wave_frequency,
            Param::WindForce => self.wind_force,
            Param::SinkingThreshold => self.sinking_threshold,
        }
    }

    fn slot_mut(&mut self, param: Param) -> &mut f32 {
        match param {
            Param::ThrustForce => &mut self.thrust_force,
            Param::DragCoefficient => &mut self.drag_coefficient,
            Param::WaterReactionForce => &mut self.water_reaction_force,
            Param::Mass => &mut self.mass,
            Param::DecelerationRate => &mut self.deceleration_rate,
            Param::WaveAmplitude => &mut self.wave_amplitude,
            Param::WaveFrequency => &mut self.wave_frequency,
            Param::WindForce => &mut self.wind_force,
            Param::SinkingThreshold => &mut self.sinking_threshold,
        }
    }

    /// Slider write: rejects non-finite input, clamps and snaps everything else.
    pub fn set(&mut self, param: Param, value: f64) -> Result<ParamChange, TuningError> {
        let spec = param.spec();
        if !value.is_finite() {
            return Err(TuningError::NonFinite { name: spec.key, value });
        }
        let applied = spec.quantize(value as f32);
        *self.slot_mut(param) = applied;
        Ok(ParamChange { param, applied, resyncs_water: spec.resyncs_water })
    }

    pub fn set_by_key(&mut self, key: &str, value: f64) -> Result<ParamChange, TuningError> {
        let param = Param::from_key(key).ok_or_else(|| TuningError::UnknownParameter(key.to_string()))?;
        self.set(param, value)
    }

    /// Copy with every field finite and inside its slider range.
    ///
    /// In particular `mass >= 30`, so dividing by it is always safe.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut out = *self;
        for spec in PARAM_SPECS.iter() {
            let slot = out.slot_mut(spec.param);
            *slot = clamp_finite(*slot, spec.min, spec.max, defaults.get(spec.param));
        }
        out
    }

    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let parsed: PhysicalConstants = serde_json::from_str(json)?;
        Ok(parsed.sanitized())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Slider manifest the host builds its panel from
    pub fn manifest_json(&self) -> String {
        let entries: Vec<ParamManifestEntry> = PARAM_SPECS
            .iter()
            .map(|s| ParamManifestEntry {
                key: s.key,
                label: s.label,
                min: s.min,
                max: s.max,
                step: s.step,
                value: self.get(s.param),
                resyncs_water: s.resyncs_water,
            })
            .collect();
        serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParamManifestEntry {
    key: &'static str,
    label: &'static str,
    min: f32,
    max: f32,
    step: f32,
    value: f32,
    resyncs_water: bool,
}

/// Full scene configuration document (constants + hull geometry)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub constants: PhysicalConstants,
    pub hull: HullDimensions,
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let parsed: SceneConfig = serde_json::from_str(json)?;
        Ok(Self {
            constants: parsed.constants.sanitized(),
            hull: parsed.hull.sanitized(),
        })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
