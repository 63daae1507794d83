use std::cell::RefCell;
use std::rc::Rc;

use analog_clock::core::{Canvas, FixedClock, VisibilityTracker};
use analog_clock::face::DialRenderer;
use analog_clock::traits::RecordingRenderer;
use analog_clock::{compute_angles, ClockFace, HandAngles, TimeParser};

fn expected(spec: Option<&str>, clock: &FixedClock) -> HandAngles {
    compute_angles(TimeParser::new(clock).parse(spec).unwrap())
}

#[test]
fn test_resync_depends_only_on_spec_and_clock() {
    let mut face = ClockFace::new(RecordingRenderer::new(), FixedClock::new(9, 0, 0));

    // hide / show cycles with the clock moving in between
    for step in [17, 3600, 59, 7200, 1] {
        face.on_visibility_changed(false);
        face.clock().advance(step);
        let angles = face.on_visibility_changed(true).unwrap();
        assert_eq!(angles, expected(None, face.clock()));
        assert_eq!(face.renderer().angles(), Some(angles));
    }
}

#[test]
fn test_last_signal_wins() {
    let mut face = ClockFace::new(RecordingRenderer::new(), FixedClock::new(1, 0, 0));

    face.on_visibility_restored();
    face.clock().advance(90);
    face.on_visibility_restored();
    face.clock().advance(90);
    let last = face.on_visibility_restored().unwrap();

    assert_eq!(last, expected(None, face.clock()));
    assert_eq!(face.angles(), last);
}

#[test]
fn test_explicit_spec_survives_resync() {
    let mut face = ClockFace::new(RecordingRenderer::new(), FixedClock::new(5, 5, 5));
    face.set_time(Some("1:23:45")).unwrap();

    face.on_visibility_changed(false);
    face.clock().advance(600);
    let angles = face.on_visibility_changed(true).unwrap();

    assert_eq!(angles, HandAngles::new(42, 143, 270));
    assert_eq!(face.time(), Some("1:23:45"));
}

#[test]
fn test_invalid_set_does_not_touch_resync_spec() {
    let mut face = ClockFace::new(RecordingRenderer::new(), FixedClock::new(5, 0, 0));
    face.set_time(Some("3")).unwrap();

    assert!(face.set_time(Some("1:2:3:4")).is_err());
    assert!(face.set_time(Some("7:60")).is_err());

    assert_eq!(face.resync().unwrap().hour_deg, 90);
}

#[test]
fn test_change_notifications_echo_spec() {
    let mut face = ClockFace::new(RecordingRenderer::new(), FixedClock::new(0, 0, 0));
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    face.subscribe(move |event| sink.borrow_mut().push(event.time.clone()));

    face.set_time(Some("4:30")).unwrap();
    face.set_time(Some("")).unwrap();

    assert_eq!(*log.borrow(), vec![Some("4:30".to_string()), None]);
}

#[test]
fn test_tracker_and_face_agree() {
    let mut tracker = VisibilityTracker::new(true);
    let mut face = ClockFace::new(RecordingRenderer::new(), FixedClock::new(0, 0, 0));

    for visible in [true, false, false, true, true, false, true] {
        let restored = tracker.observe(visible);
        assert_eq!(face.on_visibility_changed(visible).is_some(), restored);
    }
}

#[test]
fn test_dial_snaps_after_drift() {
    let mut face = ClockFace::new(DialRenderer::new(true), FixedClock::new(3, 0, 0));

    // only a few frames run while a minute of wall time passes
    for _ in 0..4 {
        face.renderer_mut().advance(0.25);
    }
    face.on_visibility_changed(false);
    face.clock().advance(60);
    face.renderer_mut().advance(60.0);

    let drifted = face.renderer().displayed().minute;
    let angles = face.on_visibility_changed(true).unwrap();

    assert_eq!(angles.minute_deg, 6);
    assert!((drifted - 6.0).abs() > 1.0);
    assert_eq!(face.renderer().displayed().minute, 6.0);
    assert_eq!(face.renderer().animation().elapsed(), 0.0);
}

#[test]
fn test_dial_paints_full_canvas() {
    let face = ClockFace::new(DialRenderer::new(false), FixedClock::new(10, 10, 10));
    let canvas = face.renderer().paint(Canvas::new(64, 64)).execute_ops();

    assert_eq!(canvas.as_bytes().len(), 64 * 64 * 4);
    assert!(canvas.as_bytes().chunks(4).all(|px| px[3] == 255));
}
