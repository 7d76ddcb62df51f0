// Host-side tests for ornament layout and gallery expansion.

use glam::Vec3;
use sculpture_core::*;
use std::collections::HashSet;

const FRAME: f32 = 1.0 / 60.0;

struct OnlyEven;

impl ImageResolver for OnlyEven {
    fn resolve(&self, locator: &str) -> Result<(), AssetError> {
        let n: usize = locator
            .trim_start_matches("photos/")
            .trim_end_matches(".jpg")
            .parse()
            .map_err(|_| AssetError::Missing(locator.to_string()))?;
        if n % 2 == 0 {
            Ok(())
        } else {
            Err(AssetError::Missing(locator.to_string()))
        }
    }
}

fn run(controller: &mut OrnamentController, signal: ControlSignal, visible: bool, seconds: f32) {
    let mut time = FrameTime::default();
    while time.elapsed < seconds {
        time = time.advance(FRAME);
        controller.update(time, &signal, visible);
    }
}

#[test]
fn layout_is_deterministic_and_distinct() {
    let a = layout(DEFAULT_ORNAMENT_COUNT);
    let b = layout(DEFAULT_ORNAMENT_COUNT);
    assert_eq!(a, b);
    assert_eq!(a.len(), 17);
    let keys: HashSet<_> = a
        .iter()
        .map(|r| {
            let p = r.base_position * 1000.0;
            (p.x as i32, p.y as i32, p.z as i32)
        })
        .collect();
    assert_eq!(keys.len(), a.len(), "ornaments overlap");
}

#[test]
fn ornaments_hang_just_outside_their_layer() {
    for (i, record) in layout(DEFAULT_ORNAMENT_COUNT).iter().enumerate() {
        let layer = i % TREE_LAYERS;
        let p = record.base_position;
        let radial = Vec3::new(p.x, 0.0, p.z).length();
        assert!(
            (radial - (tree_layer_radius(layer) + ORNAMENT_EDGE_OFFSET)).abs() < 1e-4,
            "ornament {i} radial {radial}"
        );
        assert!((p.y - (tree_layer_bottom(layer) + ORNAMENT_HANG_OFFSET)).abs() < 1e-5);
        assert_eq!(record.image, ImageHandle::Asset(image_locator(i)));
    }
    assert_eq!(image_locator(0), "photos/1.jpg");
}

#[test]
fn unresolvable_images_fall_back_to_placeholder() {
    let mut controller = OrnamentController::new(6);
    let fallbacks = controller.resolve_images(&OnlyEven);
    assert_eq!(fallbacks, 3);
    for (i, record) in controller.records().iter().enumerate() {
        let expect_asset = (i + 1) % 2 == 0;
        assert_eq!(
            matches!(record.image, ImageHandle::Asset(_)),
            expect_asset,
            "ornament {i}"
        );
    }
    // resolving again only visits remaining assets
    assert_eq!(controller.resolve_images(&OnlyEven), 0);
    assert_eq!(controller.len(), 6);
}

#[test]
fn host_reported_failure_swaps_in_placeholder() {
    let mut controller = OrnamentController::new(3);
    controller.mark_unavailable(1, &AssetError::Missing("photos/2.jpg".into()));
    controller.mark_unavailable(99, &AssetError::Missing("nowhere".into()));
    assert_eq!(controller.records()[1].image, ImageHandle::Placeholder);
    assert!(matches!(controller.records()[0].image, ImageHandle::Asset(_)));
}

#[test]
fn group_fades_in_on_tree_and_out_elsewhere() {
    let mut controller = OrnamentController::new(4);
    assert_eq!(controller.group_scale(), 0.0);
    run(&mut controller, ControlSignal::FALLBACK, true, 5.0);
    assert!(controller.group_scale() > 0.99, "{}", controller.group_scale());
    run(&mut controller, ControlSignal::FALLBACK, false, 5.0);
    assert!(controller.group_scale() < 0.01, "{}", controller.group_scale());
}

#[test]
fn open_hand_expands_into_gallery() {
    let mut controller = OrnamentController::new(DEFAULT_ORNAMENT_COUNT);
    let bases: Vec<Vec3> = controller.records().iter().map(|r| r.base_position).collect();
    run(&mut controller, ControlSignal::tracked(1.0, 0.0, 0.0), true, 4.0);
    for (i, (t, base)) in controller.transforms().iter().zip(&bases).enumerate() {
        assert!(
            (t.scale - ORNAMENT_GALLERY_SIZE).abs() < 1e-2,
            "ornament {i} scale {}",
            t.scale
        );
        assert!((t.opacity - ORNAMENT_OPACITY_GALLERY).abs() < 1e-6);
        let radial = Vec3::new(t.position.x, 0.0, t.position.z).length();
        let expected = base.length() + ORNAMENT_EXPANSION;
        assert!((radial - expected).abs() < 0.05, "ornament {i} radial {radial}");
    }
}

#[test]
fn gallery_orbits_only_past_threshold() {
    let base = Vec3::new(2.0, 1.0, 0.0);
    let half = gallery_target(base, 0, 0.5, 10.0);
    assert_eq!(half, gallery_target(base, 0, 0.5, 0.0));
    let wide_now = gallery_target(base, 0, 0.9, 0.0);
    let wide_later = gallery_target(base, 0, 0.9, 10.0);
    assert!(wide_now.distance(wide_later) > 0.1);
    assert!((wide_now.y - wide_later.y).abs() < 1e-5);
}

#[test]
fn alternate_ornaments_spread_up_and_down() {
    let base = Vec3::new(2.0, 0.0, 0.0);
    assert!(gallery_target(base, 0, 1.0, 0.0).y > 0.0);
    assert!(gallery_target(base, 1, 1.0, 0.0).y < 0.0);
}

#[test]
fn closing_the_hand_settles_back_onto_tree() {
    let mut controller = OrnamentController::new(5);
    run(&mut controller, ControlSignal::tracked(1.0, 0.0, 0.0), true, 3.0);
    run(&mut controller, ControlSignal::FALLBACK, true, 6.0);
    for (record, t) in controller.records().iter().zip(controller.transforms()) {
        // the idle bob keeps y moving a few hundredths around the base
        let offset = t.position - record.base_position;
        assert!(
            offset.x.abs() < 1e-3 && offset.z.abs() < 1e-3 && offset.y.abs() < 0.05,
            "resting at {} not {}",
            t.position,
            record.base_position
        );
        assert!((t.scale - ORNAMENT_BASE_SIZE).abs() < 1e-3);
        assert!((t.opacity - ORNAMENT_OPACITY_IDLE).abs() < 1e-3);
    }
}

#[test]
fn placeholder_glyph_is_gold_and_fades_to_clear() {
    let glyph = placeholder_glyph(PLACEHOLDER_GLYPH_SIZE);
    assert_eq!(glyph.rgba.len(), 64 * 64 * 4);
    let centre = glyph.pixel(32, 32).expect("in bounds");
    assert_eq!(centre[0], 255);
    assert!(centre[1] > 150 && centre[2] < 50, "centre {centre:?}");
    assert!(centre[3] > 200);
    assert_eq!(glyph.pixel(0, 0).expect("in bounds")[3], 0);
    assert_eq!(glyph.pixel(64, 0), None);
}

#[test]
fn particle_sprite_is_a_soft_white_disc() {
    let sprite = particle_sprite(PARTICLE_SPRITE_SIZE);
    assert_eq!(sprite.pixel(16, 16), Some([255, 255, 255, 255]));
    assert_eq!(sprite.pixel(0, 0).expect("in bounds")[3], 0);
}
