use tidewater_engine::domain::{Param, PhysicalConstants, SceneConfig, TuningError, PARAM_SPECS};
use tidewater_engine::SceneCore;

#[test]
fn partial_json_fills_defaults_and_clamps() {
    let c = PhysicalConstants::from_json(r#"{"mass": 9000, "thrustForce": 12.5}"#).unwrap();
    assert_eq!(c.mass, 500.0);
    assert_eq!(c.thrust_force, 12.5);
    assert_eq!(c.drag_coefficient, PhysicalConstants::default().drag_coefficient);
}

#[test]
fn exported_config_uses_slider_keys() {
    let json = SceneConfig::default().to_json();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    for spec in PARAM_SPECS.iter() {
        assert!(value["constants"].get(spec.key).is_some(), "missing {}", spec.key);
    }
}

#[test]
fn manifest_lists_every_slider_with_current_value() {
    let mut scene = SceneCore::new();
    scene.set_constant("windForce", 0.2).unwrap();

    let manifest: serde_json::Value = serde_json::from_str(&scene.parameters_json()).unwrap();
    let entries = manifest.as_array().unwrap();
    assert_eq!(entries.len(), PARAM_SPECS.len());

    let wind = entries.iter().find(|e| e["key"] == "windForce").unwrap();
    assert!((wind["value"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    assert_eq!(wind["resyncsWater"], false);

    let waves = entries.iter().find(|e| e["key"] == "waveAmplitude").unwrap();
    assert_eq!(waves["resyncsWater"], true);
}

#[test]
fn slider_writes_are_snapped_to_step() {
    let mut scene = SceneCore::new();
    let change = scene.set_constant("mass", 123.4).unwrap();
    assert_eq!(change.param, Param::Mass);
    assert_eq!(change.applied, 123.0);
    assert_eq!(scene.constants().mass, 123.0);
}

#[test]
fn rejected_writes_keep_previous_value() {
    let mut scene = SceneCore::new();
    assert!(matches!(scene.set_constant("hullColour", 1.0), Err(TuningError::UnknownParameter(_))));
    assert!(matches!(scene.set_constant("mass", f64::NAN), Err(TuningError::NonFinite { .. })));
    assert_eq!(*scene.constants(), PhysicalConstants::default());
}
