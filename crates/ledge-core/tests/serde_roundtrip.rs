#![cfg(feature = "serde")]

use ledge_core::{CharacterKind, LevelSetup, Move, Obstacle, Position};

#[test]
fn level_setup_fills_missing_fields_with_defaults() {
    let json = r#"{
        "obstacles": [{ "x": 625.0, "y": 600.0, "width": 150.0, "height": 20.0 }],
        "collectibles": [{ "x": 625.0, "y": 400.0 }],
        "circle": { "x": 100.0, "y": 740.0 }
    }"#;
    let level: LevelSetup = serde_json::from_str(json).expect("deserialize level");

    assert_eq!(level.obstacles, vec![Obstacle::new(625.0, 600.0, 150.0, 20.0)]);
    assert!(level.rectangle_platforms.is_empty());
    assert_eq!(level.area.width, 1280.0);
    assert_eq!(level.rectangle, Position::ZERO);

    let back: LevelSetup =
        serde_json::from_str(&serde_json::to_string(&level).expect("serialize")).expect("reparse");
    assert_eq!(back, level);
}

#[test]
fn enums_use_host_spelling() {
    assert_eq!(serde_json::to_string(&Move::RollLeft).unwrap(), "\"ROLL_LEFT\"");
    assert_eq!(
        serde_json::from_str::<CharacterKind>("\"rectangle\"").unwrap(),
        CharacterKind::Rectangle
    );
}
