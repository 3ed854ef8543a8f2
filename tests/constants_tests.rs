// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_ranges_are_ordered() {
    assert!(PARTICLE_COUNT > 0);
    assert!(FALL_MIN > 0.0 && FALL_MIN < FALL_MAX);
    assert!(SEED_SIZE_MIN < SEED_SIZE_MAX);
    assert!(OPACITY_MIN < OPACITY_MAX && OPACITY_MAX <= 1.0);
    assert!(WOBBLE_SPEED_MIN < WOBBLE_SPEED_MAX);
    assert!(FLUFF_COUNT_MIN < FLUFF_COUNT_MAX);
    assert!(FLUFF_SPREAD_MIN < FLUFF_SPREAD_MAX);

    // Respawned seeds must start above the top edge but not past the recycle line.
    assert!(SPAWN_Y_PX < 0.0);
    assert!(-SPAWN_Y_PX <= RECYCLE_MARGIN_PX);
    assert!(WRAP_MARGIN_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn memory_ranges_fit_the_viewport() {
    assert!(MEMORY_X_PCT.0 >= 0.0 && MEMORY_X_PCT.1 <= 100.0);
    assert!(MEMORY_Y_PCT.0 >= 0.0 && MEMORY_Y_PCT.1 <= 100.0);
    assert!(MEMORY_DURATION_MIN_SEC < MEMORY_DURATION_MAX_SEC);

    // A memory outlives at least one spawn interval, so several can overlap.
    assert!(MEMORY_DURATION_MIN_SEC * 1000.0 > SPAWN_INTERVAL_MS as f32);

    assert!(ROTATION_START_DEG < ROTATION_MID_DEG && ROTATION_MID_DEG < ROTATION_END_DEG);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn desktop_memories_are_larger_than_mobile() {
    assert!(IMAGE_SIZE_DESKTOP.0 > IMAGE_SIZE_MOBILE.0);
    assert!(TEXT_SIZE_DESKTOP.0 > TEXT_SIZE_MOBILE.0);
    assert!(TEXT_SIZE_MOBILE.0 > IMAGE_SIZE_MOBILE.0);
    assert!(TEXT_SIZE_DESKTOP.0 > IMAGE_SIZE_DESKTOP.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn meter_rests_below_its_live_range() {
    assert!(METER_BARS > 0);
    assert!(METER_REST_PCT < METER_MIN_PCT);
    assert!(METER_MIN_PCT < METER_MAX_PCT && METER_MAX_PCT <= 100.0);
}

#[test]
fn tape_element_ids() {
    assert_eq!(tape_element_id(2, None), "tape-2");
    assert_eq!(tape_element_id(2, Some("file")), "tape-2-file");
    assert_eq!(tape_element_id(3, Some("clear")), "tape-3-clear");
}
