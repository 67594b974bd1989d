// Host-side tests for the falling-icon simulation.

mod common;

use common::RecordingSurface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use slide_fx::constants::{ICON_MAX_LIVE, ICON_SPAWN_INTERVAL_MS};
use slide_fx::core::falling::{fallback_text_zone, in_bounce_region, step_icon};
use slide_fx::core::{FallingIcons, Icon, IconKind, Rect};

fn icons(surface: RecordingSurface, seed: u64) -> FallingIcons<RecordingSurface> {
    FallingIcons::with_rng(surface, StdRng::seed_from_u64(seed))
}

fn falling_icon(x: f32, y: f32) -> Icon {
    Icon {
        pos: Vec2::new(x, y),
        vel: Vec2::new(0.0, 2.0),
        gravity: 0.25,
        rotation: 0.0,
        rotation_speed: 0.04,
        size: 10.0,
        kind: IconKind::Doc,
        opacity: 0.7,
        bounced: false,
    }
}

#[test]
fn text_zone_falls_back_without_headline() {
    let sim = icons(RecordingSurface::new(1000.0, 800.0), 1);
    assert_eq!(sim.text_zone(), Rect::new(200.0, 200.0, 600.0, 400.0));
    assert_eq!(fallback_text_zone(Vec2::new(1000.0, 800.0)), sim.text_zone());
}

#[test]
fn text_zone_uses_headline_and_refreshes_on_start() {
    let headline = Rect::new(100.0, 250.0, 500.0, 120.0);
    let mut sim = icons(
        RecordingSurface::new(1000.0, 800.0).with_headline(headline),
        2,
    );
    assert_eq!(sim.text_zone(), headline);
    sim.start();
    assert_eq!(sim.text_zone(), headline);
    assert!(sim.surface().fits >= 2);
}

#[test]
fn bounce_region_extends_sideways_and_above() {
    let zone = Rect::new(100.0, 100.0, 200.0, 50.0);
    assert!(in_bounce_region(&zone, Vec2::new(85.0, 95.0)));
    assert!(in_bounce_region(&zone, Vec2::new(315.0, 149.0)));
    assert!(!in_bounce_region(&zone, Vec2::new(79.0, 120.0)));
    assert!(!in_bounce_region(&zone, Vec2::new(200.0, 89.0)));
    assert!(!in_bounce_region(&zone, Vec2::new(200.0, 150.0)));
}

#[test]
fn icon_bounces_once_inside_zone() {
    let zone = Rect::new(0.0, 100.0, 400.0, 60.0);
    let mut rng = StdRng::seed_from_u64(3);
    let mut icon = falling_icon(200.0, 0.0);
    let mut flips = 0;
    let mut was_bounced = false;
    for _ in 0..400 {
        let speed_before = icon.vel.y;
        let rot_before = icon.rotation_speed;
        step_icon(&mut icon, &zone, &mut rng);
        if icon.bounced && !was_bounced {
            flips += 1;
            assert!(in_bounce_region(&zone, icon.pos), "bounced outside: {:?}", icon.pos);
            let impact = speed_before + 0.25;
            assert!(icon.vel.y < 0.0);
            assert!(icon.vel.y >= -impact * 0.6 - 1e-4 && icon.vel.y <= -impact * 0.3 + 1e-4);
            assert!((icon.rotation_speed - rot_before * 2.0).abs() < 1e-6);
        }
        assert!(!(was_bounced && !icon.bounced), "bounced latch reset");
        was_bounced = icon.bounced;
    }
    assert_eq!(flips, 1);
}

#[test]
fn icon_outside_zone_never_bounces() {
    let zone = Rect::new(0.0, 100.0, 100.0, 60.0);
    let mut rng = StdRng::seed_from_u64(4);
    let mut icon = falling_icon(500.0, 0.0);
    for _ in 0..200 {
        step_icon(&mut icon, &zone, &mut rng);
        assert!(!icon.bounced);
    }
}

#[test]
fn spawning_is_capped() {
    let mut sim = icons(RecordingSurface::new(800.0, 600.0), 5);
    sim.start();
    for _ in 0..(ICON_MAX_LIVE + 50) {
        sim.spawn();
    }
    assert_eq!(sim.icons().len(), ICON_MAX_LIVE);
    assert!(!sim.spawn());
}

#[test]
fn spawned_icons_start_at_top_with_sane_ranges() {
    let mut sim = icons(RecordingSurface::new(800.0, 600.0), 6);
    sim.start();
    for _ in 0..ICON_MAX_LIVE {
        sim.spawn();
    }
    for icon in sim.icons() {
        assert_eq!(icon.pos.y, -20.0);
        assert!(icon.pos.x >= 0.0 && icon.pos.x < 800.0);
        assert!(icon.vel.y >= 1.0 && icon.vel.y < 3.0);
        assert!(icon.size >= 8.0 && icon.size < 18.0);
        assert!(icon.opacity >= 0.5 && icon.opacity < 0.9);
        assert!(!icon.bounced);
    }
    let docs = sim.icons().iter().filter(|i| i.kind == IconKind::Doc).count();
    assert!(docs > sim.icons().len() / 2, "docs={docs}");
}

#[test]
fn frames_spawn_on_interval() {
    let mut sim = icons(RecordingSurface::new(800.0, 600.0), 7);
    sim.start();
    sim.frame(0.0);
    assert_eq!(sim.icons().len(), 1);
    sim.frame(ICON_SPAWN_INTERVAL_MS / 2.0);
    assert_eq!(sim.icons().len(), 1);
    sim.frame(ICON_SPAWN_INTERVAL_MS);
    assert_eq!(sim.icons().len(), 2);
}

/// Icons spawned over one second of frames at `fps`, on a canvas tall enough
/// that none leave it.
fn spawned_in_one_second(fps: u32, seed: u64) -> usize {
    let mut sim = icons(RecordingSurface::new(800.0, 20_000.0), seed);
    sim.start();
    for k in 0..fps {
        sim.frame(k as f64 * 1000.0 / fps as f64);
    }
    sim.icons().len()
}

#[test]
fn spawn_cadence_holds_at_any_frame_rate() {
    // deadlines 0, 50, ..., 950 all fall before the last frame
    assert_eq!(spawned_in_one_second(30, 11), 20);
    assert_eq!(spawned_in_one_second(60, 12), 20);
    assert_eq!(spawned_in_one_second(144, 13), 20);
    assert_eq!(spawned_in_one_second(20, 14), 20);
}

#[test]
fn slow_frames_catch_up_missed_spawns() {
    let mut sim = icons(RecordingSurface::new(800.0, 20_000.0), 15);
    sim.start();
    sim.frame(0.0);
    sim.frame(120.0);
    // deadlines 50 and 100 were both owed
    assert_eq!(sim.icons().len(), 3);
}

#[test]
fn long_stall_restarts_the_cadence() {
    let mut sim = icons(RecordingSurface::new(800.0, 20_000.0), 16);
    sim.start();
    sim.frame(0.0);
    sim.frame(60_000.0);
    assert_eq!(sim.icons().len(), 2, "no burst after a background tab");
    sim.frame(60_000.0 + ICON_SPAWN_INTERVAL_MS);
    assert_eq!(sim.icons().len(), 3);
}

#[test]
fn icons_are_removed_below_the_canvas() {
    let mut sim = icons(RecordingSurface::new(300.0, 200.0), 8);
    sim.start();
    sim.spawn();
    for _ in 0..500 {
        sim.step();
    }
    assert!(sim.icons().is_empty());
}

#[test]
fn stop_clears_icons_and_canvas() {
    let mut sim = icons(RecordingSurface::new(800.0, 600.0), 9);
    sim.start();
    for i in 0..20 {
        sim.frame(i as f64 * 16.0);
    }
    assert!(!sim.icons().is_empty());
    sim.stop();
    assert!(sim.icons().is_empty());
    assert!(sim.surface().is_cleared());

    // no spawning while stopped
    sim.frame(10_000.0);
    assert!(sim.icons().is_empty());
}

#[test]
fn restart_resets_population() {
    let mut sim = icons(RecordingSurface::new(800.0, 600.0), 10);
    sim.start();
    sim.spawn();
    sim.spawn();
    sim.start();
    assert_eq!(sim.icons().len(), 2, "start while running is a no-op");
    sim.stop();
    sim.start();
    assert!(sim.icons().is_empty());
}
