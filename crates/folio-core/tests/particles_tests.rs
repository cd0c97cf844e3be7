// Host-side tests for the particle field simulation.

use folio_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn field(width: f32, height: f32) -> ParticleField {
    ParticleField::new(FieldParams::default(), width, height, StdRng::seed_from_u64(7))
}

#[test]
fn count_follows_viewport_width() {
    let params = FieldParams::default();
    assert_eq!(params.particle_count(1920.0), 120);
    assert_eq!(params.particle_count(480.0), 60);
    assert_eq!(params.particle_count(1000.0), 83);
    assert_eq!(params.particle_count(0.0), 60);
}

#[test]
fn resize_regenerates_with_new_count() {
    let mut f = field(1920.0, 1080.0);
    assert_eq!(f.particles().len(), 120);
    f.resize(480.0, 800.0);
    assert_eq!(f.particles().len(), 60);
    assert_eq!(f.size(), (480.0, 800.0));
    for p in f.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 480.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 800.0);
    }
}

#[test]
fn generated_particles_respect_ranges() {
    let f = field(1280.0, 720.0);
    let half = PARTICLE_SPEED_SPAN / 2.0;
    for p in f.particles() {
        assert!(p.vel.x.abs() <= half && p.vel.y.abs() <= half);
        assert!(p.radius >= PARTICLE_RADIUS_MIN);
        assert!(p.radius <= PARTICLE_RADIUS_MIN + PARTICLE_RADIUS_SPAN);
    }
}

#[test]
fn positions_stay_within_wrap_margin() {
    let (w, h) = (640.0, 360.0);
    let mut f = field(w, h);
    let m = PARTICLE_WRAP_MARGIN;
    let pointers = [Vec2::new(320.0, 180.0), Vec2::new(0.0, 0.0), Vec2::new(-100.0, 900.0)];
    for frame in 0..5000 {
        f.step(pointers[frame % pointers.len()]);
        for p in f.particles() {
            assert!(p.pos.x >= -m && p.pos.x <= w + m, "x escaped: {}", p.pos.x);
            assert!(p.pos.y >= -m && p.pos.y <= h + m, "y escaped: {}", p.pos.y);
        }
    }
}

#[test]
fn pointer_pushes_nearby_particles_away() {
    let mut f = field(800.0, 600.0);
    let pointer = Vec2::new(400.0, 300.0);
    let before: Vec<(f32, f32)> = f
        .particles()
        .iter()
        .map(|p| (p.pos.distance(pointer), (p.pos + p.vel).distance(pointer)))
        .collect();
    f.step(pointer);
    for (p, (_, drift_only)) in f.particles().iter().zip(before) {
        let now = p.pos.distance(pointer);
        if drift_only > 1.0 && drift_only < POINTER_REPEL_RADIUS {
            assert!(now >= drift_only - 1e-3, "{now} < {drift_only}");
        }
    }
}

#[test]
fn links_fade_with_distance() {
    let f = field(1920.0, 1080.0);
    let mut count = 0;
    for link in f.links() {
        count += 1;
        assert!(link.a < link.b);
        let d = f.particles()[link.a].pos.distance(f.particles()[link.b].pos);
        assert!(d <= LINK_MAX_DISTANCE);
        let expected = (1.0 - d / LINK_MAX_DISTANCE) * LINK_ALPHA_SCALE;
        assert!((link.alpha - expected).abs() < 1e-6);
        assert!(link.alpha >= 0.0 && link.alpha <= LINK_ALPHA_SCALE);
    }
    let n = f.particles().len();
    assert!(count <= n * (n - 1) / 2);
}

#[test]
fn pulse_and_backing_scale() {
    assert_eq!(pulse_radius(0.0), PULSE_BASE_PX * PULSE_RADIUS_SCALE);
    for t in [0.0, 100.0, 1234.5, 1.0e6] {
        let r = pulse_radius(t);
        assert!(r >= (PULSE_BASE_PX - PULSE_SWING_PX) * PULSE_RADIUS_SCALE - 1e-3);
        assert!(r <= (PULSE_BASE_PX + PULSE_SWING_PX) * PULSE_RADIUS_SCALE + 1e-3);
    }
    assert_eq!(backing_scale(1.0), 1.0);
    assert_eq!(backing_scale(3.0), 2.0);
    assert_eq!(backing_scale(0.0), 1.0);
    assert_eq!(backing_scale(f64::NAN), 1.0);
    assert_eq!(link_color(0.1), "rgba(119, 167, 255, 0.100)");
}
