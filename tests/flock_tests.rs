// Host-side tests for the cursor flock.

mod common;

use common::RecordingSurface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slide_fx::constants::{FLOCK_MAX_SPEED, FLOCK_SIZE, FLOCK_WRAP_MARGIN};
use slide_fx::core::flock::{clamp_speed, steering};
use slide_fx::core::{Boid, Flock};

fn flock(seed: u64) -> Flock<RecordingSurface> {
    Flock::with_rng(RecordingSurface::new(800.0, 600.0), StdRng::seed_from_u64(seed))
}

fn boid(x: f32, y: f32, vx: f32, vy: f32) -> Boid {
    Boid {
        pos: Vec2::new(x, y),
        vel: Vec2::new(vx, vy),
        size: 12.0,
    }
}

#[test]
fn clamp_speed_never_exceeds_max() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10_000 {
        let mag = 10f32.powf(rng.gen_range(-3.0..6.0));
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let v = Vec2::new(angle.cos(), angle.sin()) * mag;
        let clamped = clamp_speed(v, FLOCK_MAX_SPEED);
        assert!(
            clamped.length() <= FLOCK_MAX_SPEED * (1.0 + 1e-5),
            "|{v:?}| -> {}",
            clamped.length()
        );
        if v.length() <= FLOCK_MAX_SPEED {
            assert_eq!(clamped, v);
        } else {
            // direction preserved
            assert!(clamped.normalize().dot(v.normalize()) > 0.9999);
        }
    }
}

#[test]
fn start_creates_fixed_population_inside_canvas() {
    let mut f = flock(1);
    f.start();
    assert_eq!(f.boids().len(), FLOCK_SIZE);
    for b in f.boids() {
        assert!(b.pos.x >= 0.0 && b.pos.x < 800.0);
        assert!(b.pos.y >= 0.0 && b.pos.y < 600.0);
        assert!(b.vel.x.abs() <= 4.0 && b.vel.y.abs() <= 4.0);
        assert!(b.size >= 10.0 && b.size < 18.0);
    }
    f.start();
    assert_eq!(f.boids().len(), FLOCK_SIZE);
}

#[test]
fn speeds_stay_clamped_while_flocking() {
    let mut f = flock(2);
    f.start();
    f.pointer_moved(Vec2::new(400.0, 300.0));
    for _ in 0..200 {
        f.step();
        for b in f.boids() {
            assert!(b.vel.length() <= FLOCK_MAX_SPEED * (1.0 + 1e-5));
        }
    }
}

#[test]
fn boids_wrap_within_margin() {
    let mut f = flock(3);
    f.start();
    for _ in 0..300 {
        f.step();
        for b in f.boids() {
            let m = FLOCK_WRAP_MARGIN + FLOCK_MAX_SPEED;
            assert!(b.pos.x >= -m && b.pos.x <= 800.0 + m, "x={}", b.pos.x);
            assert!(b.pos.y >= -m && b.pos.y <= 600.0 + m, "y={}", b.pos.y);
        }
    }
}

#[test]
fn lone_boid_is_pulled_toward_pointer() {
    let boids = [boid(100.0, 100.0, 0.0, 0.0)];
    let acc = steering(&boids, 0, Some(Vec2::new(400.0, 100.0)));
    assert!((acc - Vec2::new(0.5, 0.0)).length() < 1e-5);

    // out of attraction range
    let acc = steering(&boids, 0, Some(Vec2::new(1000.0, 100.0)));
    assert_eq!(acc, Vec2::ZERO);

    // no pointer tracked
    assert_eq!(steering(&boids, 0, None), Vec2::ZERO);
}

#[test]
fn close_neighbors_push_apart() {
    let boids = [boid(100.0, 100.0, 0.0, 0.0), boid(110.0, 100.0, 0.0, 0.0)];
    let acc = steering(&boids, 0, None);
    // separation dominates cohesion at 10px
    assert!(acc.x < 0.0, "acc={acc:?}");
    assert!(acc.y.abs() < 1e-6);
}

#[test]
fn distant_neighbors_attract_and_align() {
    let boids = [boid(100.0, 100.0, 0.0, 0.0), boid(150.0, 100.0, 0.0, 2.0)];
    let acc = steering(&boids, 0, None);
    // cohesion toward +x, alignment toward +y
    assert!((acc.x - 50.0 * 0.003).abs() < 1e-5);
    assert!((acc.y - 2.0 * 0.06).abs() < 1e-5);
}

#[test]
fn coincident_boids_do_not_produce_nan() {
    let boids = [boid(50.0, 50.0, 1.0, 0.0), boid(50.0, 50.0, -1.0, 0.0)];
    let acc = steering(&boids, 0, Some(Vec2::new(50.0, 50.0)));
    assert!(acc.is_finite());
}

#[test]
fn pointer_is_ignored_while_stopped_and_dropped_on_stop() {
    let mut f = flock(4);
    f.pointer_moved(Vec2::new(10.0, 10.0));
    assert_eq!(f.pointer(), None);

    f.start();
    f.pointer_moved(Vec2::new(10.0, 10.0));
    assert_eq!(f.pointer(), Some(Vec2::new(10.0, 10.0)));

    f.stop();
    assert_eq!(f.pointer(), None);
    assert!(f.boids().is_empty());
    assert!(f.surface().is_cleared());
}

#[test]
fn pointer_is_mapped_into_container_space() {
    let mut surface = RecordingSurface::new(800.0, 600.0);
    surface.origin = Vec2::new(0.0, 1200.0);
    let mut f = Flock::with_rng(surface, StdRng::seed_from_u64(5));
    f.start();
    f.pointer_moved(Vec2::new(30.0, 1250.0));
    assert_eq!(f.pointer(), Some(Vec2::new(30.0, 50.0)));
}

#[test]
fn frame_draws_every_boid() {
    let mut f = flock(6);
    f.start();
    f.frame();
    assert_eq!(f.surface().count(&common::Op::Fill), FLOCK_SIZE);
    assert_eq!(f.surface().count(&common::Op::Stroke), FLOCK_SIZE);
}
