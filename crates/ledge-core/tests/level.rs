use ledge_core::{
    validate_reach, CharacterKind, LevelError, LevelSetup, Move, Obstacle, Position,
};

fn two_colour_level() -> LevelSetup {
    LevelSetup {
        obstacles: vec![Obstacle::new(625.0, 600.0, 150.0, 20.0)],
        rectangle_platforms: vec![Obstacle::new(300.0, 500.0, 100.0, 20.0)],
        circle_platforms: vec![Obstacle::new(900.0, 450.0, 80.0, 20.0)],
        collectibles: vec![Position::new(625.0, 400.0)],
        circle: Position::new(100.0, 740.0),
        rectangle: Position::new(1100.0, 740.0),
        ..LevelSetup::default()
    }
}

#[test]
fn obstacle_corners_are_on_the_top_surface() {
    let o = Obstacle::new(625.0, 600.0, 150.0, 20.0);
    assert_eq!(o.top(), 590.0);
    assert_eq!(o.top_left(), Position::new(550.0, 590.0));
    assert_eq!(o.top_right(), Position::new(700.0, 590.0));
}

#[test]
fn each_character_plans_against_the_other_colour() {
    let level = two_colour_level();

    let circle = level.platforms_for(CharacterKind::Circle);
    assert_eq!(circle, vec![level.obstacles[0], level.rectangle_platforms[0]]);

    let rectangle = level.platforms_for(CharacterKind::Rectangle);
    assert_eq!(rectangle, vec![level.obstacles[0], level.circle_platforms[0]]);

    assert_eq!(level.start_for(CharacterKind::Rectangle), Position::new(1100.0, 740.0));
}

#[test]
fn validate_accepts_well_formed_levels() {
    assert_eq!(two_colour_level().validate(), Ok(()));
    assert_eq!(LevelSetup::default().validate(), Ok(()));
}

#[test]
fn validate_reports_the_offending_entry() {
    let mut level = two_colour_level();
    level.circle_platforms.push(Obstacle::new(1.0, 1.0, 0.0, 5.0));
    assert_eq!(
        level.validate(),
        Err(LevelError::DegenerateObstacle {
            group: "circle_platforms",
            index: 1,
            width: 0.0,
            height: 5.0,
        })
    );

    let mut level = two_colour_level();
    level.obstacles[0].y = f32::NAN;
    assert_eq!(
        level.validate(),
        Err(LevelError::NonFiniteObstacle {
            group: "obstacles",
            index: 0,
        })
    );

    let mut level = two_colour_level();
    level.collectibles.push(Position::new(f32::INFINITY, 0.0));
    assert_eq!(
        level.validate(),
        Err(LevelError::NonFiniteCollectible { index: 1 })
    );

    let mut level = two_colour_level();
    level.rectangle = Position::new(0.0, f32::NAN);
    let err = level.validate().unwrap_err();
    assert_eq!(err.to_string(), "rectangle start position is non-finite");
}

#[test]
fn reach_must_be_finite_and_non_negative() {
    assert!(validate_reach(0.0).is_ok());
    assert!(validate_reach(200.0).is_ok());
    assert_eq!(validate_reach(-1.0), Err(LevelError::InvalidReach(-1.0)));
    assert!(validate_reach(f32::INFINITY).is_err());
}

#[test]
fn character_move_sets_are_disjoint_and_named() {
    assert_eq!(
        CharacterKind::Circle.moves(),
        &[Move::RollLeft, Move::RollRight, Move::Jump]
    );
    assert_eq!(CharacterKind::Rectangle.moves().len(), 4);
    for m in CharacterKind::Circle.moves() {
        assert!(!CharacterKind::Rectangle.accepts(*m));
    }
    assert!(CharacterKind::Rectangle.accepts(Move::NoAction));
    assert_eq!(CharacterKind::Rectangle.ascend_move(), Move::MorphUp);
    assert_eq!(Move::MorphDown.to_string(), "MORPH_DOWN");
}

#[test]
fn character_kind_parses_case_insensitively() {
    assert_eq!("Circle".parse::<CharacterKind>(), Ok(CharacterKind::Circle));
    assert_eq!(" rectangle ".parse::<CharacterKind>(), Ok(CharacterKind::Rectangle));
    let err = "triangle".parse::<CharacterKind>().unwrap_err();
    assert!(err.to_string().contains("triangle"));
}
