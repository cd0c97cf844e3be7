//! Particle network simulation behind the page background.
//!
//! Particles drift with constant velocity, wrap around the viewport with a
//! small margin, and are pushed away from the pointer. Pairs closer than the
//! link distance are connected by lines whose alpha fades with distance.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub min_count: usize,
    pub max_count: usize,
    pub px_per_particle: f64,
    pub speed_span: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    pub wrap_margin: f32,
    pub repel_radius: f32,
    pub repel_strength: f32,
    pub link_distance: f32,
    pub link_alpha: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            min_count: PARTICLE_MIN_COUNT,
            max_count: PARTICLE_MAX_COUNT,
            px_per_particle: PARTICLE_PX_PER_POINT,
            speed_span: PARTICLE_SPEED_SPAN,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_span: PARTICLE_RADIUS_SPAN,
            wrap_margin: PARTICLE_WRAP_MARGIN,
            repel_radius: POINTER_REPEL_RADIUS,
            repel_strength: POINTER_REPEL_STRENGTH,
            link_distance: LINK_MAX_DISTANCE,
            link_alpha: LINK_ALPHA_SCALE,
        }
    }
}

impl FieldParams {
    /// `min(max, max(min, floor(width / px_per_particle)))`
    pub fn particle_count(&self, viewport_width: f64) -> usize {
        let by_width = (viewport_width.max(0.0) / self.px_per_particle).floor() as usize;
        by_width.max(self.min_count).min(self.max_count)
    }
}

/// Connection between particles `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

pub struct ParticleField {
    params: FieldParams,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: FieldParams, width: f32, height: f32, rng: StdRng) -> Self {
        let mut field = Self {
            params,
            width,
            height,
            particles: Vec::new(),
            rng,
        };
        field.regenerate();
        field
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// New viewport size: recompute the count and scatter fresh particles.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let count = self.params.particle_count(self.width as f64);
        let (w, h) = (self.width.max(0.0), self.height.max(0.0));
        let half = self.params.speed_span * 0.5;
        let (radius_min, radius_span) = (self.params.radius_min, self.params.radius_span);
        let rng = &mut self.rng;
        let particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                vel: Vec2::new(rng.gen_range(-half..=half), rng.gen_range(-half..=half)),
                radius: radius_min + rng.gen::<f32>() * radius_span,
            })
            .collect();
        self.particles = particles;
        log::debug!("[field] {} particles for {}x{}", count, w, h);
    }

    /// Advance one frame: integrate, repel from `pointer`, then wrap.
    pub fn step(&mut self, pointer: Vec2) {
        let p = &self.params;
        let margin = p.wrap_margin;
        for particle in &mut self.particles {
            particle.pos += particle.vel;

            let away = particle.pos - pointer;
            let dist = away.length();
            if dist < p.repel_radius {
                let push = (p.repel_radius - dist) / p.repel_radius;
                particle.pos += away * p.repel_strength * push;
            }

            particle.pos.x = wrap(particle.pos.x, self.width, margin);
            particle.pos.y = wrap(particle.pos.y, self.height, margin);
        }
    }

    /// All pairs within the link distance. O(n²); the count cap keeps it
    /// small.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let max = self.params.link_distance;
        let scale = self.params.link_alpha;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |a| {
            ((a + 1)..ps.len()).filter_map(move |b| {
                let dist = ps[a].pos.distance(ps[b].pos);
                (dist <= max).then(|| Link {
                    a,
                    b,
                    alpha: (1.0 - dist / max) * scale,
                })
            })
        })
    }
}

#[inline]
fn wrap(v: f32, extent: f32, margin: f32) -> f32 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}

/// Radius of the pointer pulse at `time_ms`.
pub fn pulse_radius(time_ms: f64) -> f32 {
    let t = time_ms as f32;
    (PULSE_BASE_PX + (t * PULSE_RATE_PER_MS).sin() * PULSE_SWING_PX) * PULSE_RADIUS_SCALE
}

/// Device pixel ratio used for canvas backing stores.
pub fn backing_scale(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// CSS colour for a link of the given alpha.
pub fn link_color(alpha: f32) -> String {
    let (r, g, b) = LINK_RGB;
    format!("rgba({r}, {g}, {b}, {alpha:.3})")
}
