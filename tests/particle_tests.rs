// Host-side tests for the dandelion particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use core::constants::*;
use core::*;

fn positions(field: &ParticleField) -> Vec<(f32, f32)> {
    field.particles().iter().map(|p| (p.pos.x, p.pos.y)).collect()
}

fn active_field(viewport: Viewport, seed: u64) -> ParticleField {
    let mut field = ParticleField::new(FieldParams::default(), viewport, seed);
    field.set_active(true);
    field
}

#[test]
fn initial_particles_are_within_ranges() {
    let vp = Viewport::new(1280.0, 720.0);
    let field = ParticleField::new(FieldParams::default(), vp, 7);
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    for p in field.particles() {
        assert!((0.0..=vp.width).contains(&p.pos.x));
        assert!((0.0..=vp.height).contains(&p.pos.y));
        assert!(p.vel.x.abs() <= DRIFT_MAX);
        assert!((FALL_MIN..=FALL_MAX).contains(&p.vel.y));
        assert!((SEED_SIZE_MIN..=SEED_SIZE_MAX).contains(&p.size));
        assert!((OPACITY_MIN..=OPACITY_MAX).contains(&p.opacity));
        assert!((WOBBLE_SPEED_MIN..=WOBBLE_SPEED_MAX).contains(&p.wobble_speed));
        assert!((FLUFF_COUNT_MIN..=FLUFF_COUNT_MAX).contains(&p.fluff_count));
        assert!((FLUFF_SPREAD_MIN..=FLUFF_SPREAD_MAX).contains(&p.fluff_spread));
        assert!(p.stem_curve.abs() <= STEM_CURVE_MAX);
        assert_eq!(p.strands.len(), p.fluff_count as usize);
        // tilt leans against the drift
        assert!((p.tilt + p.vel.x * TILT_DRAG).abs() <= TILT_JITTER + 1e-6);
    }
}

#[test]
fn strands_fan_out_from_the_crown() {
    let field = ParticleField::new(FieldParams::default(), Viewport::new(800.0, 600.0), 3);
    for p in field.particles() {
        for s in &p.strands {
            let len = (s.tip - CROWN).length();
            assert!((14.0 - 1e-3..=22.0 + 1e-3).contains(&len));
        }
        // middle strands point up
        let mid = &p.strands[p.strands.len() / 2];
        assert!(mid.tip.y < CROWN.y);
    }
}

#[test]
fn same_seed_same_field() {
    let vp = Viewport::new(640.0, 480.0);
    let a = ParticleField::new(FieldParams::default(), vp, 99);
    let b = ParticleField::new(FieldParams::default(), vp, 99);
    assert_eq!(positions(&a), positions(&b));
}

#[test]
fn inactive_field_does_not_move() {
    let mut field = ParticleField::new(FieldParams::default(), Viewport::new(800.0, 600.0), 1);
    let before = positions(&field);
    assert!(!field.is_active());
    assert!(!field.tick());
    assert_eq!(positions(&field), before);
    assert_eq!(field.time(), 0.0);
}

#[test]
fn seeds_fall_and_drift_each_tick() {
    let mut field = active_field(Viewport::new(2000.0, 2000.0), 11);
    let before = positions(&field);
    assert!(field.tick());
    assert_eq!(field.time(), 1.0);
    for ((_, y0), p) in before.iter().zip(field.particles()) {
        if p.pos.y != SPAWN_Y_PX {
            assert!((p.pos.y - (y0 + p.vel.y)).abs() < 1e-4);
        }
    }
}

#[test]
fn pool_size_never_changes_and_fallen_seeds_respawn_on_top() {
    let vp = Viewport::new(300.0, 20.0);
    let mut field = active_field(vp, 5);
    let mut respawns = 0;
    for _ in 0..2_000 {
        field.tick();
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!(p.pos.y <= vp.height + RECYCLE_MARGIN_PX);
            if p.pos.y == SPAWN_Y_PX {
                respawns += 1;
                assert!(p.pos.y <= 0.0);
            }
        }
    }
    assert!(respawns > 0);
}

#[test]
fn horizontal_position_wraps_within_margin() {
    let vp = Viewport::new(10.0, 10_000.0);
    let mut field = active_field(vp, 21);
    for _ in 0..3_000 {
        field.tick();
        for p in field.particles() {
            assert!(p.pos.x >= -WRAP_MARGIN_PX && p.pos.x <= vp.width + WRAP_MARGIN_PX);
        }
    }
}

#[test]
fn pausing_keeps_particles_in_place() {
    let mut field = active_field(Viewport::new(800.0, 600.0), 8);
    for _ in 0..30 {
        field.tick();
    }
    let snapshot = positions(&field);
    let time = field.time();

    assert!(field.set_active(false));
    assert!(!field.set_active(false));
    field.tick();
    assert!(field.set_active(true));

    assert_eq!(positions(&field), snapshot);
    assert_eq!(field.time(), time);
}

#[test]
fn resize_keeps_existing_positions() {
    let mut field = ParticleField::new(FieldParams::default(), Viewport::new(1200.0, 800.0), 4);
    let before = positions(&field);
    field.resize(Viewport::new(400.0, 300.0));
    assert_eq!(positions(&field), before);
    assert_eq!(field.viewport(), Viewport::new(400.0, 300.0));
}

#[test]
fn viewport_device_class() {
    assert!(Viewport::new(767.0, 1000.0).is_mobile());
    assert!(!Viewport::new(768.0, 1000.0).is_mobile());
    assert_eq!(Viewport::new(-5.0, -1.0), Viewport::new(0.0, 0.0));
}

#[test]
fn rotation_sways_around_tilt() {
    let field = ParticleField::new(FieldParams::default(), Viewport::new(800.0, 600.0), 2);
    for p in field.particles() {
        for t in [0.0, 10.0, 250.0] {
            assert!((p.rotation(t) - p.tilt).abs() <= WOBBLE_ROTATION_AMPLITUDE + 1e-6);
        }
        assert!((p.scale() - p.size / SEED_UNIT_SIZE).abs() < 1e-6);
    }
}
