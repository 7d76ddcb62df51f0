// Host-side tests for the morph engine.

use glam::Vec3;
use sculpture_core::*;

const FRAME: f32 = 1.0 / 60.0;

fn config(count: usize, archetype: Archetype) -> RenderConfig {
    RenderConfig::default()
        .with_particle_count(count)
        .expect("non-zero count")
        .with_archetype(archetype)
}

fn hand(openness: f32, tilt_x: f32, tilt_y: f32) -> ControlSignal {
    ControlSignal::tracked(openness, tilt_x, tilt_y)
}

#[test]
fn equal_buffers_are_a_fixed_point() {
    let target = vec![Vec3::new(1.0, -2.0, 3.0); 4];
    let mut current = target.clone();
    morph_step(&mut current, &target, 0.37);
    assert_eq!(current, target);
}

#[test]
fn morph_step_moves_the_given_fraction() {
    let mut current = vec![Vec3::ZERO];
    morph_step(&mut current, &[Vec3::new(10.0, 0.0, 0.0)], 0.25);
    assert!((current[0].x - 2.5).abs() < 1e-6, "got {}", current[0].x);
    morph_step(&mut current, &[Vec3::new(10.0, 0.0, 0.0)], 1.0);
    assert_eq!(current[0], Vec3::new(10.0, 0.0, 0.0));
}

#[test]
fn tracking_morphs_faster_than_idle() {
    assert_eq!(morph_rate(&ControlSignal::FALLBACK), MORPH_RATE_IDLE);
    assert_eq!(morph_rate(&hand(0.5, 0.0, 0.0)), MORPH_RATE_TRACKING);
}

#[test]
fn large_frame_delta_does_not_overshoot() {
    let mut engine = MorphEngine::new(&config(200, Archetype::Heart), 3);
    engine.update(FrameTime::new(5.0, 5.0), &ControlSignal::FALLBACK);
    let target = engine.target_positions().points();
    for (c, t) in engine.positions().points().iter().zip(target) {
        assert!(c.distance(*t) < 1e-5, "overshoot: {c} vs {t}");
    }
}

#[test]
fn live_buffer_converges_on_target() {
    let mut engine = MorphEngine::new(&config(500, Archetype::Saturn), 11);
    let mut time = FrameTime::default();
    for _ in 0..300 {
        time = time.advance(FRAME);
        engine.update(time, &ControlSignal::FALLBACK);
    }
    let target = engine.target_positions().points();
    let worst = engine
        .positions()
        .points()
        .iter()
        .zip(target)
        .map(|(c, t)| c.distance(*t))
        .fold(0.0, f32::max);
    assert!(worst < 1e-2, "worst residual {worst}");
}

#[test]
fn retargeting_keeps_the_live_buffer() {
    let mut engine = MorphEngine::new(&config(100, Archetype::Flower), 5);
    let before = engine.positions().clone();
    engine.set_target(Archetype::Fireworks);
    assert_eq!(engine.positions(), &before);
    assert_eq!(engine.archetype(), Archetype::Fireworks);
    assert_eq!(engine.target_positions().len(), 100);
}

#[test]
fn reset_resizes_both_buffers() {
    let mut engine = MorphEngine::new(&config(100, Archetype::Buddha), 5);
    engine.reset(250);
    assert_eq!(engine.particle_count(), 250);
    assert_eq!(engine.target_positions().len(), 250);
    assert_eq!(engine.archetype(), Archetype::Buddha);
    let max = engine
        .positions()
        .points()
        .iter()
        .map(|p| p.length())
        .fold(0.0, f32::max);
    assert!(max <= SPHERE_RADIUS + 1e-4, "reset should restart from the sphere");
}

#[test]
fn color_blends_toward_selection() {
    let mut engine = MorphEngine::new(&config(10, Archetype::Sphere), 1);
    let start = engine.color();
    let goal = Color::rgb(1.0, 0.0, 1.0);
    engine.set_color(goal);
    engine.update(FrameTime::new(0.1, 0.1), &ControlSignal::FALLBACK);
    let mid = engine.color();
    assert!(mid != start && mid != goal, "expected a partial blend");
    let mut time = FrameTime::new(0.1, 0.1);
    for _ in 0..600 {
        time = time.advance(FRAME);
        engine.update(time, &ControlSignal::FALLBACK);
    }
    assert!(engine.color().0.distance(goal.0) < 1e-3);
}

#[test]
fn open_hand_grows_the_sculpture() {
    let (target, smoothing) = scale_target(&hand(1.0, 0.0, 0.0), 0.0);
    assert!((target - (SCALE_MIN + SCALE_SPAN)).abs() < 1e-6);
    assert_eq!(smoothing, SCALE_SMOOTHING_TRACKING);
    let (closed, _) = scale_target(&hand(0.0, 0.0, 0.0), 0.0);
    assert!((closed - SCALE_MIN).abs() < 1e-6);
}

#[test]
fn idle_scale_breathes_around_one() {
    for i in 0..100 {
        let (target, smoothing) = scale_target(&ControlSignal::FALLBACK, i as f32 * 0.1);
        assert!((target - 1.0).abs() <= BREATHE_AMPLITUDE + 1e-6);
        assert_eq!(smoothing, SCALE_SMOOTHING_IDLE);
    }
}

#[test]
fn small_tilt_inside_dead_zone_holds_yaw() {
    assert_eq!(yaw_velocity(&hand(0.5, 0.05, 0.0)), 0.0);
    assert_eq!(yaw_velocity(&hand(0.5, -0.09, 0.0)), 0.0);
    assert!((yaw_velocity(&hand(0.5, 0.5, 0.0)) - 0.5 * YAW_GAIN).abs() < 1e-6);
    assert!(yaw_velocity(&hand(0.5, -1.0, 0.0)) < 0.0);
    assert_eq!(yaw_velocity(&ControlSignal::FALLBACK), YAW_IDLE_SPEED);
}

#[test]
fn pitch_follows_vertical_tilt_and_relaxes_when_idle() {
    let mut o = Orientation::default();
    for _ in 0..600 {
        o = step_orientation(o, &hand(0.5, 0.0, 1.0), FRAME);
    }
    assert!((o.pitch - PITCH_GAIN).abs() < 1e-3, "pitch {}", o.pitch);
    for _ in 0..1200 {
        o = step_orientation(o, &ControlSignal::FALLBACK, FRAME);
    }
    assert!(o.pitch.abs() < 1e-3, "pitch {}", o.pitch);
}

#[test]
fn yaw_stays_wrapped() {
    let mut o = Orientation::default();
    for _ in 0..10_000 {
        o = step_orientation(o, &hand(0.5, 1.0, 0.0), FRAME);
        assert!((0.0..std::f32::consts::TAU).contains(&o.yaw), "yaw {}", o.yaw);
    }
}

#[test]
fn seeded_engines_agree() {
    let a = MorphEngine::new(&config(64, Archetype::Heart), 42);
    let b = MorphEngine::new(&config(64, Archetype::Heart), 42);
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.target_positions(), b.target_positions());
}
