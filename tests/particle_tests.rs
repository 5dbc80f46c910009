// Host-side tests for the particle background.

use folio_fx::core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, PartialEq)]
enum Call {
    Clear(Vec2),
    Circle(Vec2, f32, Rgba),
    Line(Vec2, Vec2, f32, Rgba),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Surface for Recorder {
    fn clear(&mut self, size: Vec2) {
        self.calls.push(Call::Clear(size));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(Call::Circle(center, radius, color));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.calls.push(Call::Line(from, to, width, color));
    }
}

fn still(x: f32, y: f32) -> Particle {
    Particle {
        pos: Vec2::new(x, y),
        vel: Vec2::ZERO,
        radius: 1.0,
        opacity: 0.3,
    }
}

#[test]
fn count_scales_with_area_and_caps() {
    let p = ParticleParams::default();
    assert_eq!(particle_count(Vec2::new(800.0, 600.0), &p), 32);
    assert_eq!(particle_count(Vec2::new(1920.0, 1080.0), &p), 80);
    assert_eq!(particle_count(Vec2::new(100.0, 100.0), &p), 0);
    assert_eq!(particle_count(Vec2::ZERO, &p), 0);
}

#[test]
fn count_saturates_on_bad_sizes() {
    let p = ParticleParams::default();
    assert_eq!(particle_count(Vec2::new(-800.0, 600.0), &p), 0);
    assert_eq!(particle_count(Vec2::new(f32::NAN, 600.0), &p), 0);
}

#[test]
fn random_particles_respect_ranges() {
    let params = ParticleParams::default();
    let size = Vec2::new(1280.0, 720.0);
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::new(size, params, &mut rng);
    assert_eq!(field.particles().len(), 61);
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= size.x);
        assert!(p.pos.y >= 0.0 && p.pos.y <= size.y);
        assert!(p.radius >= 0.5 && p.radius <= 2.0);
        assert!(p.vel.x.abs() <= 0.15 && p.vel.y.abs() <= 0.15);
        assert!(p.opacity >= 0.1 && p.opacity <= 0.5);
    }
}

#[test]
fn seeded_layouts_are_reproducible() {
    let size = Vec2::new(800.0, 600.0);
    let a = ParticleField::new(
        size,
        ParticleParams::default(),
        &mut StdRng::seed_from_u64(3),
    );
    let b = ParticleField::new(
        size,
        ParticleParams::default(),
        &mut StdRng::seed_from_u64(3),
    );
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn velocity_flips_only_on_the_crossed_axis() {
    let bounds = Vec2::new(100.0, 100.0);
    let mut p = Particle {
        pos: Vec2::new(99.95, 50.0),
        vel: Vec2::new(0.1, 0.1),
        radius: 1.0,
        opacity: 0.2,
    };
    p.advance(bounds);
    assert!((p.pos.x - 100.05).abs() < 1e-4, "no clamping on reflection");
    assert!(p.vel.x < 0.0);
    assert!(p.vel.y > 0.0);

    // Next frame carries it back inside without a second flip.
    p.advance(bounds);
    assert!(p.pos.x < 100.0);
    assert!(p.vel.x < 0.0);
}

#[test]
fn velocity_flips_below_zero_on_y() {
    let mut p = Particle {
        pos: Vec2::new(10.0, 0.05),
        vel: Vec2::new(0.0, -0.1),
        radius: 1.0,
        opacity: 0.2,
    };
    p.advance(Vec2::new(100.0, 100.0));
    assert!(p.vel.y > 0.0);
    assert_eq!(p.vel.x, 0.0);
}

#[test]
fn velocity_flips_below_zero_on_x() {
    let mut p = Particle {
        pos: Vec2::new(0.05, 50.0),
        vel: Vec2::new(-0.1, 0.1),
        radius: 1.0,
        opacity: 0.2,
    };
    p.advance(Vec2::new(100.0, 100.0));
    assert!(p.pos.x < 0.0, "no clamping on reflection");
    assert!(p.vel.x > 0.0);
    assert_eq!(p.vel.y, 0.1);
}

#[test]
fn velocity_flips_past_height_on_y() {
    let mut p = Particle {
        pos: Vec2::new(50.0, 99.95),
        vel: Vec2::new(0.1, 0.1),
        radius: 1.0,
        opacity: 0.2,
    };
    p.advance(Vec2::new(100.0, 100.0));
    assert!(p.vel.y < 0.0);
    assert_eq!(p.vel.x, 0.1);
}

#[test]
fn link_alpha_decays_linearly_to_threshold() {
    let p = ParticleParams::default();
    let a = link_alpha(100.0, &p).unwrap();
    assert!((a - 0.02).abs() < 1e-6);
    assert!((link_alpha(0.0, &p).unwrap() - 0.06).abs() < 1e-6);
    assert!(link_alpha(150.0, &p).is_none());
    assert!(link_alpha(200.0, &p).is_none());
}

#[test]
fn links_cover_each_close_pair_once() {
    let size = Vec2::new(1000.0, 1000.0);
    let field = ParticleField::from_particles(
        size,
        ParticleParams::default(),
        vec![still(0.0, 0.0), still(100.0, 0.0), still(400.0, 0.0)],
    );
    let links: Vec<Link> = field.links().collect();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].from, Vec2::new(0.0, 0.0));
    assert_eq!(links[0].to, Vec2::new(100.0, 0.0));
    assert!((links[0].alpha - 0.02).abs() < 1e-6);
}

#[test]
fn frame_clears_then_draws_particles_then_links() {
    let size = Vec2::new(300.0, 300.0);
    let mut field = ParticleField::from_particles(
        size,
        ParticleParams::default(),
        vec![still(10.0, 10.0), still(20.0, 10.0)],
    );
    let mut rec = Recorder::default();
    field.frame(&mut rec);

    assert_eq!(rec.calls.len(), 4);
    assert_eq!(rec.calls[0], Call::Clear(size));
    match &rec.calls[1] {
        Call::Circle(c, r, color) => {
            assert_eq!(*c, Vec2::new(10.0, 10.0));
            assert_eq!(*r, 1.0);
            assert_eq!(color.css(), "rgba(108, 99, 255, 0.3)");
        }
        other => panic!("expected circle, got {other:?}"),
    }
    assert!(matches!(rec.calls[2], Call::Circle(..)));
    match &rec.calls[3] {
        Call::Line(_, _, w, color) => {
            assert_eq!(*w, 0.5);
            assert!((color.a - 0.06 * (1.0 - 10.0 / 150.0)).abs() < 1e-6);
        }
        other => panic!("expected line, got {other:?}"),
    }
}

#[test]
fn resize_keeps_particles_by_default() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = ParticleField::new(
        Vec2::new(800.0, 600.0),
        ParticleParams::default(),
        &mut rng,
    );
    let before = field.particles().to_vec();
    field.resize(Vec2::new(200.0, 150.0));
    assert_eq!(field.size(), Vec2::new(200.0, 150.0));
    assert_eq!(field.particles(), &before[..]);
}

#[test]
fn resize_can_clamp_into_new_bounds() {
    let params = ParticleParams {
        clamp_on_resize: true,
        ..ParticleParams::default()
    };
    let mut field = ParticleField::from_particles(
        Vec2::new(800.0, 600.0),
        params,
        vec![still(700.0, 500.0)],
    );
    field.resize(Vec2::new(200.0, 150.0));
    assert_eq!(field.particles()[0].pos, Vec2::new(200.0, 150.0));
}
