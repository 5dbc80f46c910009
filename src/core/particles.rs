//! Drifting particle background.
//!
//! The field owns every particle for the lifetime of the page. Each frame the
//! particles advance, reflect off the surface edges by flipping velocity (no
//! position clamping), and nearby pairs are joined by faint lines.

use super::constants::*;
use super::surface::{Rgba, Surface};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct ParticleParams {
    pub area_per_particle: f32,
    pub max_count: usize,
    pub radius_range: (f32, f32),
    pub speed_max: f32,
    pub opacity_range: (f32, f32),
    pub rgb: [u8; 3],
    pub link_max_distance: f32,
    pub link_base_alpha: f32,
    pub link_line_width: f32,
    /// Pull particles back inside the surface when it shrinks.
    pub clamp_on_resize: bool,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            area_per_particle: PARTICLE_AREA_PER_PARTICLE,
            max_count: PARTICLE_MAX_COUNT,
            radius_range: (PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_MAX),
            speed_max: PARTICLE_SPEED_MAX,
            opacity_range: (PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_MAX),
            rgb: PARTICLE_RGB,
            link_max_distance: LINK_MAX_DISTANCE,
            link_base_alpha: LINK_BASE_ALPHA,
            link_line_width: LINK_LINE_WIDTH,
            clamp_on_resize: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, size: Vec2, params: &ParticleParams) -> Self {
        let pos = Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y);
        let radius = lerp(params.radius_range, rng.gen());
        let vel = Vec2::new(
            (rng.gen::<f32>() * 2.0 - 1.0) * params.speed_max,
            (rng.gen::<f32>() * 2.0 - 1.0) * params.speed_max,
        );
        let opacity = lerp(params.opacity_range, rng.gen());
        Self {
            pos,
            vel,
            radius,
            opacity,
        }
    }

    /// Move one frame, then flip each velocity component whose axis left
    /// `[0, bounds]`.
    #[inline]
    pub fn advance(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
        }
    }
}

#[inline]
fn lerp((lo, hi): (f32, f32), t: f32) -> f32 {
    lo + (hi - lo) * t
}

/// `min(max_count, floor(width * height / area_per_particle))`. Negative or
/// NaN areas yield zero.
pub fn particle_count(size: Vec2, params: &ParticleParams) -> usize {
    let raw = (size.x * size.y / params.area_per_particle).floor();
    // `as` saturates: NaN and negatives become 0.
    (raw as usize).min(params.max_count)
}

/// Alpha of the line joining two particles `distance` apart, or `None` when
/// they are too far apart to be linked.
#[inline]
pub fn link_alpha(distance: f32, params: &ParticleParams) -> Option<f32> {
    (distance < params.link_max_distance)
        .then(|| params.link_base_alpha * (1.0 - distance / params.link_max_distance))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    size: Vec2,
    params: ParticleParams,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(size: Vec2, params: ParticleParams, rng: &mut R) -> Self {
        let count = particle_count(size, &params);
        let particles = (0..count)
            .map(|_| Particle::random(rng, size, &params))
            .collect();
        Self {
            particles,
            size,
            params,
        }
    }

    /// Build a field from explicit particles, e.g. a saved or scripted layout.
    pub fn from_particles(size: Vec2, params: ParticleParams, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            size,
            params,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn params(&self) -> &ParticleParams {
        &self.params
    }

    /// Follow a viewport resize. The particle set itself is kept.
    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
        if self.params.clamp_on_resize {
            let max = size.max(Vec2::ZERO);
            for p in &mut self.particles {
                p.pos = p.pos.clamp(Vec2::ZERO, max);
            }
        }
    }

    pub fn step(&mut self) {
        let bounds = self.size;
        for p in &mut self.particles {
            p.advance(bounds);
        }
    }

    /// Every unordered pair closer than the link distance, recomputed on
    /// each call. O(n²), bounded by `max_count`.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |i| {
            (i + 1..ps.len()).filter_map(move |j| {
                let (a, b) = (ps[i].pos, ps[j].pos);
                link_alpha(a.distance(b), &self.params).map(|alpha| Link {
                    from: a,
                    to: b,
                    alpha,
                })
            })
        })
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, Rgba::from_rgb(self.params.rgb, p.opacity));
        }
        for link in self.links() {
            surface.stroke_line(
                link.from,
                link.to,
                self.params.link_line_width,
                Rgba::from_rgb(self.params.rgb, link.alpha),
            );
        }
    }

    /// One full animation frame: clear, move, draw.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.size);
        self.step();
        self.draw(surface);
    }
}
