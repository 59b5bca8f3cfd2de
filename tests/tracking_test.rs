use idtrack_rs::{IdTracker, Rect, TrackState, TrackerConfig, ids_to_signed};

#[test]
fn test_basic_tracking() {
    let mut tracker = IdTracker::new(TrackerConfig::default()).unwrap();

    // Frame 1: One detection
    let ids1 = tracker.update(&[Rect::new(0.0, 0.0, 10.0, 10.0)]);
    assert_eq!(ids1, vec![Some(0)]);

    // Frame 2: Same object moved slightly
    let ids2 = tracker.update(&[Rect::new(1.0, 1.0, 11.0, 11.0)]);
    assert_eq!(ids2, vec![Some(0)]);
    assert_eq!(tracker.track(0).unwrap().missed(), 0);

    // Frame 3: Object disappears
    let ids3 = tracker.update(&[]);
    assert!(ids3.is_empty());
    assert_eq!(tracker.track(0).unwrap().missed(), 1);

    // Object stays live through max_missing empty frames in total
    for _ in 1..60 {
        tracker.update(&[]);
    }
    assert_eq!(tracker.state_of(0), Some(TrackState::Missing(60)));

    // One more miss pushes it past the limit
    tracker.update(&[]);
    assert_eq!(tracker.state_of(0), Some(TrackState::Expired));
    assert!(tracker.track(0).is_none());

    // Object reappears at the same spot but gets a fresh id
    let ids = tracker.update(&[Rect::new(1.0, 1.0, 11.0, 11.0)]);
    assert_eq!(ids, vec![Some(1)]);
}

#[test]
fn test_occluded_object_keeps_id() {
    let mut tracker = IdTracker::default();
    let a = Rect::new(100.0, 100.0, 140.0, 200.0);
    let b = Rect::new(400.0, 100.0, 440.0, 200.0);
    assert_eq!(tracker.update(&[a, b]), vec![Some(0), Some(1)]);

    // `a` is occluded for a few frames while `b` keeps moving
    for step in 1..=5 {
        let shift = step as f32 * 2.0;
        let moved = Rect::new(400.0 + shift, 100.0, 440.0 + shift, 200.0);
        assert_eq!(tracker.update(&[moved]), vec![Some(1)]);
    }
    assert_eq!(tracker.track(0).unwrap().missed(), 5);

    // Both visible again, listed in the opposite order
    let back = Rect::new(104.0, 102.0, 144.0, 202.0);
    let b_now = Rect::new(412.0, 100.0, 452.0, 200.0);
    assert_eq!(tracker.update(&[b_now, back]), vec![Some(1), Some(0)]);
    assert_eq!(tracker.track(0).unwrap().missed(), 0);
}

#[test]
fn test_single_id_budget() {
    let config = TrackerConfig::default().with_max_ids(1).with_max_missing(2);
    let mut tracker = IdTracker::new(config).unwrap();

    let near = Rect::new(0.0, 0.0, 10.0, 10.0);
    let far = Rect::new(600.0, 400.0, 640.0, 480.0);
    let ids = tracker.update(&[near, far]);
    assert_eq!(ids_to_signed(&ids), vec![0, -1]);

    for _ in 0..3 {
        assert_eq!(ids_to_signed(&tracker.update(&[far])), vec![-1]);
    }
    assert_eq!(tracker.state_of(0), Some(TrackState::Expired));

    for _ in 0..3 {
        assert_eq!(ids_to_signed(&tracker.update(&[far, near])), vec![-1, -1]);
    }
}

#[test]
fn test_deterministic_runs() {
    let frames: Vec<Vec<Rect>> = (0..40)
        .map(|f| {
            let t = f as f32;
            let mut boxes = vec![
                Rect::new(10.0 + 3.0 * t, 10.0, 50.0 + 3.0 * t, 90.0),
                Rect::new(300.0 - 2.0 * t, 50.0, 340.0 - 2.0 * t, 130.0),
            ];
            if f % 7 == 3 {
                boxes.pop();
            }
            if f % 5 == 0 {
                boxes.push(Rect::new(200.0, 5.0 * t, 230.0, 5.0 * t + 60.0));
            }
            boxes
        })
        .collect();

    let run = || {
        let mut tracker = IdTracker::new(TrackerConfig::default().with_max_ids(6)).unwrap();
        frames
            .iter()
            .map(|boxes| tracker.update(boxes))
            .collect::<Vec<_>>()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
    for (boxes, ids) in frames.iter().zip(&first) {
        assert_eq!(boxes.len(), ids.len());
    }
}

#[test]
fn test_independent_streams() {
    let mut left = IdTracker::default();
    let mut right = IdTracker::default();

    left.update(&[Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(100.0, 0.0, 110.0, 10.0)]);
    let ids = right.update(&[Rect::new(500.0, 500.0, 510.0, 510.0)]);

    assert_eq!(ids, vec![Some(0)]);
    assert_eq!(left.next_id(), 2);
    assert_eq!(right.next_id(), 1);
}
