use std::thread;

use ledge_core::{AgentMessage, Outbox, Position, SensorFeed, SensorSnapshot};

#[test]
fn outbox_drains_everything_in_send_order() {
    let mut outbox = Outbox::new();
    outbox.push(AgentMessage::new("first"));
    outbox.push(AgentMessage::new("second").with_attachment("pen"));
    assert_eq!(outbox.len(), 2);

    let drained = outbox.drain();
    assert_eq!(drained[0].text, "first");
    assert_eq!(drained[1].attachment.as_deref(), Some("pen"));
    assert!(outbox.is_empty());
    assert!(outbox.drain().is_empty());
}

#[test]
fn sensor_feed_starts_empty_and_keeps_the_latest_publish() {
    let feed = SensorFeed::new();
    assert!(!feed.has_snapshot());
    assert_eq!(feed.latest(), None);

    let host = feed.clone();
    host.publish(SensorSnapshot {
        collectibles_left: 1,
        circle: Position::new(1.0, 2.0),
        ..SensorSnapshot::default()
    });
    host.publish(SensorSnapshot {
        collectibles_left: 0,
        circle: Position::new(3.0, 4.0),
        ..SensorSnapshot::default()
    });

    let latest = feed.latest().expect("snapshot published");
    assert_eq!(latest.collectibles_left, 0);
    assert_eq!(latest.circle, Position::new(3.0, 4.0));
}

#[test]
fn sensor_feed_is_shared_across_threads() {
    let feed = SensorFeed::new();
    let host = feed.clone();

    let handle = thread::spawn(move || {
        for i in 0..100u32 {
            host.publish(SensorSnapshot {
                collectibles_left: i,
                collectibles: (0..i).map(|c| Position::new(c as f32, 0.0)).collect(),
                ..SensorSnapshot::default()
            });
        }
    });

    for _ in 0..100 {
        let guard = feed.lock();
        if let Some(snapshot) = guard.as_ref() {
            // A snapshot is always observed whole, never half-written.
            assert_eq!(snapshot.collectibles.len() as u32, snapshot.collectibles_left);
        }
    }

    handle.join().expect("publisher thread");
    assert_eq!(feed.latest().map(|s| s.collectibles_left), Some(99));
}
