// Host-side tests for tracking sessions and the shared signal slot.

use glam::Vec3;
use sculpture_core::*;
use std::thread;

fn open_hand() -> LandmarkSet {
    let mut points = vec![Vec3::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    points[THUMB_TIP] = Vec3::ZERO;
    points[INDEX_TIP] = Vec3::new(0.3, 0.0, 0.0);
    LandmarkSet::new(points)
}

#[test]
fn tracker_starts_disabled_on_fallback() {
    let tracker = GestureTracker::new();
    assert!(!tracker.is_enabled());
    assert_eq!(tracker.latest(), ControlSignal::FALLBACK);
}

#[test]
fn submitted_detection_becomes_latest() {
    let mut tracker = GestureTracker::new();
    let session = tracker.enable();
    assert!(session.submit(Some(&open_hand())));
    let latest = tracker.latest();
    assert!(latest.hand_present);
    assert_eq!(latest.openness, 1.0);

    assert!(session.submit(None));
    assert_eq!(tracker.latest(), ControlSignal::FALLBACK);
}

#[test]
fn enabling_twice_reuses_the_session() {
    let mut tracker = GestureTracker::new();
    let a = tracker.enable();
    let b = tracker.enable();
    assert_eq!(a.epoch(), b.epoch());
    assert!(a.is_live() && b.is_live());
}

#[test]
fn disable_resets_signal_and_orphans_sessions() {
    let mut tracker = GestureTracker::new();
    let session = tracker.enable();
    session.submit(Some(&open_hand()));
    tracker.disable();

    assert!(!tracker.is_enabled());
    assert!(!session.is_live());
    assert_eq!(tracker.latest(), ControlSignal::FALLBACK);

    // a late callback from the closed session must not bring the hand back
    assert!(!session.submit(Some(&open_hand())));
    assert_eq!(tracker.latest(), ControlSignal::FALLBACK);
}

#[test]
fn reenabling_issues_a_fresh_epoch() {
    let mut tracker = GestureTracker::new();
    let first = tracker.enable();
    tracker.disable();
    let second = tracker.enable();
    assert_ne!(first.epoch(), second.epoch());
    assert!(!first.submit(Some(&open_hand())));
    assert!(second.submit(Some(&open_hand())));
    assert!(tracker.latest().hand_present);
}

#[test]
fn detector_failure_reads_as_no_hand() {
    let mut tracker = GestureTracker::new();
    let session = tracker.enable();
    session.submit(Some(&open_hand()));
    assert!(session.report_failure(&DetectionError::Unavailable("camera busy".into())));
    assert_eq!(tracker.latest(), ControlSignal::FALLBACK);
}

#[test]
fn slot_epoch_guards_publication() {
    let slot = SignalSlot::new();
    let epoch = slot.advance_epoch(ControlSignal::FALLBACK);
    let tracked = ControlSignal::tracked(0.7, 0.1, -0.2);
    assert!(slot.publish_in(epoch, tracked));
    assert_eq!(slot.latest(), tracked);
    assert!(!slot.publish_in(epoch + 1, ControlSignal::FALLBACK));
    assert_eq!(slot.latest(), tracked);
}

/// Open hand raised to the top of the frame, or a closed hand at centre,
/// so openness and vertical tilt always agree.
fn pulse(open: bool) -> LandmarkSet {
    let mut points = vec![Vec3::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    points[THUMB_TIP] = Vec3::ZERO;
    points[INDEX_TIP] = Vec3::new(if open { 0.3 } else { 0.0 }, 0.0, 0.0);
    points[MIDDLE_BASE] = Vec3::new(0.5, if open { 0.0 } else { 0.5 }, 0.0);
    LandmarkSet::new(points)
}

#[test]
fn readers_never_see_partial_signals_across_threads() {
    let mut tracker = GestureTracker::new();
    let session = tracker.enable();
    let writer = thread::spawn(move || {
        for i in 0..2000 {
            session.submit(Some(&pulse(i % 2 == 0)));
        }
    });
    for _ in 0..2000 {
        let s = tracker.latest();
        if s.hand_present {
            assert_eq!(s.openness, s.tilt_y, "torn signal {s:?}");
        }
    }
    writer.join().expect("writer thread");
}
