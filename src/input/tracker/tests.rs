use super::*;
use crate::canvas::CanvasError;
use crate::draw::PathCommand;
use crate::input::PointerSample;
use crate::util::Point;

const TOLERANCE: f64 = 8.0;

fn sample(x: f64, y: f64) -> PointerSample {
    PointerSample::new(x, y, 0)
}

fn tracking_tracker(x: f64, y: f64) -> InputTracker {
    let mut tracker = InputTracker::new(TOLERANCE);
    tracker.on_gesture_start(sample(x, y)).unwrap();
    tracker
}

#[test]
fn test_start_resets_path_and_commits_first_point() {
    let mut tracker = InputTracker::new(TOLERANCE);
    tracker.on_gesture_start(sample(10.0, 10.0)).unwrap();

    assert!(tracker.is_tracking());
    assert_eq!(
        tracker.path().commands(),
        &[PathCommand::MoveTo(Point::new(10.0, 10.0))]
    );
    let gesture = tracker.gesture().unwrap();
    assert_eq!(gesture.last_committed, Point::new(10.0, 10.0));
    assert_eq!(gesture.pending, Point::new(10.0, 10.0));
}

#[test]
fn test_move_appends_midpoint_segment() {
    let mut tracker = tracking_tracker(10.0, 10.0);
    let outcome = tracker.on_gesture_move(sample(30.0, 50.0)).unwrap();

    let MoveOutcome::Appended(segment) = outcome else {
        panic!("expected a segment, got {outcome:?}");
    };
    assert_eq!(segment.start, Point::new(10.0, 10.0));
    assert_eq!(segment.control, Point::new(10.0, 10.0));
    assert_eq!(segment.end, Point::new(20.0, 30.0));
    assert_eq!(
        tracker.path().last_segment(),
        Some(&PathCommand::QuadTo {
            control: Point::new(10.0, 10.0),
            end: Point::new(20.0, 30.0),
        })
    );
}

#[test]
fn test_move_commits_raw_sample_not_midpoint() {
    let mut tracker = tracking_tracker(0.0, 0.0);
    tracker.on_gesture_move(sample(20.0, 0.0)).unwrap();
    assert_eq!(
        tracker.gesture().unwrap().last_committed,
        Point::new(20.0, 0.0)
    );

    // The next segment starts where the previous curve ended (the midpoint)
    // but bends around the previous raw sample.
    let MoveOutcome::Appended(segment) = tracker.on_gesture_move(sample(20.0, 20.0)).unwrap()
    else {
        panic!("expected a segment");
    };
    assert_eq!(segment.start, Point::new(10.0, 0.0));
    assert_eq!(segment.control, Point::new(20.0, 0.0));
    assert_eq!(segment.end, Point::new(20.0, 10.0));
}

#[test]
fn test_move_below_tolerance_is_dropped() {
    let mut tracker = tracking_tracker(10.0, 10.0);
    let outcome = tracker
        .on_gesture_move(sample(10.0 + TOLERANCE - 0.5, 10.0 - TOLERANCE + 0.5))
        .unwrap();

    assert_eq!(outcome, MoveOutcome::Dropped);
    assert_eq!(tracker.path().len(), 1);
    let gesture = tracker.gesture().unwrap();
    assert_eq!(gesture.last_committed, Point::new(10.0, 10.0));
    assert_eq!(gesture.pending, Point::new(17.5, 2.5));
}

#[test]
fn test_move_at_exact_tolerance_on_one_axis_is_accepted() {
    let mut tracker = tracking_tracker(10.0, 10.0);
    let outcome = tracker
        .on_gesture_move(sample(10.0, 10.0 + TOLERANCE))
        .unwrap();
    assert!(matches!(outcome, MoveOutcome::Appended(_)));
}

#[test]
fn test_dropped_samples_measure_from_last_committed_point() {
    let mut tracker = tracking_tracker(0.0, 0.0);
    // Each step is below tolerance relative to the previous sample, but the
    // gate compares against the last committed point.
    assert_eq!(
        tracker.on_gesture_move(sample(5.0, 0.0)).unwrap(),
        MoveOutcome::Dropped
    );
    let outcome = tracker.on_gesture_move(sample(10.0, 0.0)).unwrap();
    let MoveOutcome::Appended(segment) = outcome else {
        panic!("expected a segment");
    };
    assert_eq!(segment.end, Point::new(5.0, 0.0));
}

#[test]
fn test_end_clears_path_and_returns_to_idle() {
    let mut tracker = tracking_tracker(10.0, 10.0);
    tracker.on_gesture_move(sample(10.0, 40.0)).unwrap();
    tracker.on_gesture_end(sample(10.0, 45.0)).unwrap();

    assert!(!tracker.is_tracking());
    assert_eq!(tracker.state(), &TrackerState::Idle);
    assert!(tracker.path().is_empty());
    assert!(tracker.gesture().is_none());
}

#[test]
fn test_end_without_start_is_rejected() {
    let mut tracker = InputTracker::new(TOLERANCE);
    assert!(matches!(
        tracker.on_gesture_end(sample(1.0, 1.0)),
        Err(CanvasError::NoActiveGesture)
    ));
    assert_eq!(tracker.state(), &TrackerState::Idle);
}

#[test]
fn test_move_without_start_is_rejected() {
    let mut tracker = InputTracker::new(TOLERANCE);
    assert!(matches!(
        tracker.on_gesture_move(sample(50.0, 50.0)),
        Err(CanvasError::NoActiveGesture)
    ));
    assert!(tracker.path().is_empty());
}

#[test]
fn test_second_start_is_rejected_and_keeps_gesture() {
    let mut tracker = tracking_tracker(10.0, 10.0);
    tracker.on_gesture_move(sample(10.0, 40.0)).unwrap();

    assert!(matches!(
        tracker.on_gesture_start(sample(99.0, 99.0)),
        Err(CanvasError::GestureAlreadyActive)
    ));
    assert_eq!(tracker.path().len(), 2);
    assert_eq!(
        tracker.gesture().unwrap().last_committed,
        Point::new(10.0, 40.0)
    );
}

#[test]
fn test_new_gesture_starts_from_clean_path() {
    let mut tracker = tracking_tracker(0.0, 0.0);
    tracker.on_gesture_move(sample(50.0, 0.0)).unwrap();
    tracker.on_gesture_end(sample(50.0, 0.0)).unwrap();

    tracker.on_gesture_start(sample(7.0, 7.0)).unwrap();
    assert_eq!(
        tracker.path().commands(),
        &[PathCommand::MoveTo(Point::new(7.0, 7.0))]
    );
}

#[test]
fn test_negative_tolerance_is_clamped_to_zero() {
    let tracker = InputTracker::new(-3.0);
    assert_eq!(tracker.tolerance(), 0.0);
}

#[test]
fn test_failed_stencil_leaves_gesture_uncommitted() {
    let mut tracker = tracking_tracker(10.0, 10.0);
    let result = tracker.on_gesture_move_with(sample(10.0, 40.0), |_| {
        Err(CanvasError::Cairo(cairo::Error::NoMemory))
    });

    assert!(matches!(result, Err(CanvasError::Cairo(_))));
    assert_eq!(tracker.path().segment_count(), 0);
    let gesture = tracker.gesture().unwrap();
    assert_eq!(gesture.last_committed, Point::new(10.0, 10.0));
    assert_eq!(gesture.pending, Point::new(10.0, 40.0));

    // The same sample can be committed once stenciling succeeds.
    let mut stenciled = None;
    let outcome = tracker
        .on_gesture_move_with(sample(10.0, 40.0), |segment| {
            stenciled = Some(*segment);
            Ok(())
        })
        .unwrap();
    assert_eq!(outcome, MoveOutcome::Appended(stenciled.unwrap()));
    assert_eq!(tracker.path().segment_count(), 1);
    assert_eq!(
        tracker.gesture().unwrap().last_committed,
        Point::new(10.0, 40.0)
    );
}

#[test]
fn test_dropped_move_skips_stencil() {
    let mut tracker = tracking_tracker(10.0, 10.0);
    let outcome = tracker
        .on_gesture_move_with(sample(12.0, 12.0), |_| {
            panic!("dropped samples are never stenciled")
        })
        .unwrap();
    assert_eq!(outcome, MoveOutcome::Dropped);
}
