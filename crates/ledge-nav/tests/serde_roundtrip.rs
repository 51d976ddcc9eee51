#![cfg(feature = "serde")]

use ledge_nav::{Graph, GraphLayout, NavPath, Navigator, Obstacle, Position};

#[test]
fn layout_defaults_fill_missing_fields() {
    let layout: GraphLayout =
        serde_json::from_str(r#"{ "vertex_clearance": 25.0 }"#).expect("deserialize layout");
    assert_eq!(layout.vertex_clearance, 25.0);
    assert_eq!(layout.ground_left, GraphLayout::default().ground_left);
}

#[test]
fn found_paths_roundtrip_via_serde() {
    let graph = Graph::new(
        vec![Obstacle::new(625.0, 600.0, 150.0, 20.0)],
        &[Position::new(625.0, 400.0)],
        200.0,
    );
    let path = graph.find_path(Position::new(100.0, 740.0)).expect("path");

    let json = serde_json::to_string(&path).expect("serialize path");
    let back: NavPath = serde_json::from_str(&json).expect("deserialize path");
    assert_eq!(back, path);
}
