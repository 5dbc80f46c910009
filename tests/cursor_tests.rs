// Host-side tests for the cursor follower and parallax math.

use folio_fx::core::*;
use glam::Vec2;

#[test]
fn dot_tracks_pointer_with_fixed_offset() {
    let mut ps = PointerState::default();
    let top_left = ps.on_move(Vec2::new(50.0, 50.0));
    assert_eq!(top_left, Vec2::new(47.0, 47.0));
    assert_eq!(ps.raw, Vec2::new(50.0, 50.0));
    assert_eq!(ps.eased, Vec2::ZERO, "ring only moves on frame steps");
}

#[test]
fn ring_eases_toward_pointer() {
    let mut ps = PointerState::default();
    ps.on_move(Vec2::new(100.0, 0.0));
    let first = ps.step();
    assert!((first.x - 15.0).abs() < 1e-4);
    assert_eq!(first.y, 0.0);
    let second = ps.step();
    assert!((second.x - 27.75).abs() < 1e-4);
}

#[test]
fn ring_never_overshoots() {
    let mut ps = PointerState::default();
    ps.on_move(Vec2::new(-40.0, 250.0));
    let mut prev = ps.eased;
    for _ in 0..200 {
        let next = ps.step();
        assert!(next.x >= -40.0 && next.x <= prev.x);
        assert!(next.y <= 250.0 && next.y >= prev.y);
        prev = next;
    }
    assert!(prev.distance(Vec2::new(-40.0, 250.0)) < 1e-2);
}

#[test]
fn ease_toward_matches_interpolation_law() {
    let cur = Vec2::new(10.0, -5.0);
    let target = Vec2::new(30.0, 15.0);
    let next = ease_toward(cur, target, 0.15);
    assert!((next.x - (10.0 + 20.0 * 0.15)).abs() < 1e-5);
    assert!((next.y - (-5.0 + 20.0 * 0.15)).abs() < 1e-5);
}

#[test]
fn cursor_needs_a_desktop_viewport() {
    let p = CursorParams::default();
    assert!(!cursor_enabled(768.0, &p));
    assert!(cursor_enabled(769.0, &p));
    assert!(cursor_enabled(1440.0, &p));
}

#[test]
fn parallax_is_zero_at_centre() {
    let viewport = Vec2::new(1000.0, 800.0);
    assert_eq!(
        parallax_offset(Vec2::new(500.0, 400.0), viewport),
        Vec2::ZERO
    );
    let off = parallax_offset(Vec2::new(1000.0, 0.0), viewport);
    assert!((off.x - 2.5).abs() < 1e-6);
    assert!((off.y + 2.0).abs() < 1e-6);
    assert_eq!(
        translate_css(Vec2::new(2.5, -2.0)),
        "translate(2.5px, -2px)"
    );
}
