use ledge_agent::{CatchTracker, ControlProfile, Controller, FollowStep, WaypointFollower};
use ledge_core::{CharacterKind, Move, Position};
use ledge_nav::NavPath;

fn p(x: f32, y: f32) -> Position {
    Position::new(x, y)
}

#[test]
fn circle_decision_table() {
    let c = Controller::new(CharacterKind::Circle, ControlProfile::circle());
    let next = p(500.0, 400.0);

    // (current, expected)
    let cases = [
        (p(500.0, 470.0), Move::Jump),      // exactly above_margin below
        (p(300.0, 600.0), Move::Jump),      // left edge of the window
        (p(700.0, 600.0), Move::Jump),      // right edge of the window
        (p(299.0, 600.0), Move::RollRight), // just outside the window
        (p(701.0, 600.0), Move::RollLeft),
        (p(400.0, 469.0), Move::RollRight), // not far enough below
        (p(600.0, 400.0), Move::RollLeft),
        (p(500.0, 400.0), Move::RollLeft), // ties go left
        (p(450.0, 300.0), Move::RollRight), // waypoint below
    ];
    for (current, expected) in cases {
        assert_eq!(c.next_move(next, current), expected, "from {current:?}");
    }
}

#[test]
fn rectangle_uses_its_own_moves() {
    let c = Controller::new(CharacterKind::Rectangle, ControlProfile::rectangle());
    let next = p(500.0, 400.0);
    assert_eq!(c.next_move(next, p(520.0, 500.0)), Move::MorphUp);
    assert_eq!(c.next_move(next, p(100.0, 420.0)), Move::MoveRight);
    assert_eq!(c.next_move(next, p(900.0, 420.0)), Move::MoveLeft);
}

#[test]
fn reached_uses_profile_margins() {
    let circle = Controller::new(CharacterKind::Circle, ControlProfile::circle());
    let rectangle = Controller::new(CharacterKind::Rectangle, ControlProfile::rectangle());
    let waypoint = p(500.0, 500.0);

    assert!(circle.reached(waypoint, p(510.0, 550.0)));
    assert!(!circle.reached(waypoint, p(511.0, 500.0)));
    assert!(!circle.reached(waypoint, p(500.0, 551.0)));
    assert!(rectangle.reached(waypoint, p(570.0, 450.0)));
    assert!(!rectangle.reached(waypoint, p(571.0, 500.0)));
}

#[test]
fn follower_pops_one_waypoint_per_advance() {
    let c = Controller::new(CharacterKind::Circle, ControlProfile::circle());
    let goal = p(600.0, 300.0);
    let corner = p(400.0, 500.0);
    let start = p(100.0, 740.0);

    let mut follower = WaypointFollower::new();
    assert_eq!(follower.advance(&c, start), None);

    follower.set_path(NavPath::new(vec![goal, corner, start]));
    assert_eq!(follower.advance(&c, start), Some(FollowStep::Toward(corner)));
    assert_eq!(follower.advance(&c, p(200.0, 740.0)), Some(FollowStep::Toward(corner)));
    assert_eq!(follower.advance(&c, corner), Some(FollowStep::Toward(goal)));
    assert_eq!(follower.advance(&c, goal), Some(FollowStep::Completed(goal)));
    assert!(!follower.has_path());
}

#[test]
fn empty_paths_are_not_followed() {
    let mut follower = WaypointFollower::new();
    follower.set_path(NavPath::default());
    assert!(!follower.has_path());
}

#[test]
fn tracker_counts_catches_by_exact_position() {
    let a = p(10.0, 10.0);
    let b = p(20.0, 20.0);
    let mut tracker = CatchTracker::new(vec![a, b]);
    assert!(!tracker.any_caught());

    assert!(tracker.record(&[a, b]).is_empty());
    assert_eq!(tracker.record(&[b]), vec![a]);
    assert!(tracker.any_caught());

    // Already caught collectibles are not reported twice.
    assert!(tracker.record(&[b]).is_empty());
    assert_eq!(tracker.record(&[]), vec![b]);
    assert_eq!(tracker.caught(), &[a, b]);
    assert!(tracker.uncaught().is_empty());
    assert_eq!(tracker.initial_count(), 2);
}
