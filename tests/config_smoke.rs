use nebula_engine::SceneConfig;

#[test]
fn config_smoke_defaults_match_reference_scene() {
    let config = SceneConfig::default();

    assert_eq!(config.star_count, 1000);
    assert_eq!(config.star_spawn_radius, 150.0);
    assert_eq!(config.star_respawn_rate, [50.0, 200.0]);
    assert_eq!(config.star_rate_floor, 10.0);
    assert_eq!(config.nucleus_radius, 30.0);
    assert_eq!(config.nucleus_detail, 10);
    assert_eq!(config.nucleus_bump, 0.16);
    assert_eq!(config.nucleus_noise_phase, [0.8, 1.2, 0.4]);
    assert_eq!(config.resize_debounce_ms, 88.0);
    assert_eq!(config.orbit_min_distance, 150.0);
    assert_eq!(config.orbit_max_distance, 350.0);
}

#[test]
fn config_smoke_partial_document_parses() {
    let json = r#"{
        "star_count": 250,
        "nucleus_detail": 4,
        "resize_debounce_ms": 120.0
    }"#;

    let config = SceneConfig::from_json(json).expect("partial document should parse");
    assert_eq!(config.star_count, 250);
    assert_eq!(config.nucleus_detail, 4);
    assert_eq!(config.resize_debounce_ms, 120.0);
    assert_eq!(config.star_spawn_radius, 150.0, "untouched field keeps default");
}

#[test]
fn config_smoke_rejects_broken_documents() {
    assert!(SceneConfig::from_json("not json").is_err());
    assert!(SceneConfig::from_json(r#"{"star_count": 0}"#).is_err());
    assert!(SceneConfig::from_json(r#"{"orbit_min_distance": 500.0}"#).is_err());
    assert!(SceneConfig::from_json(r#"{"no_such_key": 1}"#).is_err());
}
