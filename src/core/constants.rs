// Shared tuning constants for the deck, the dandelion field and the memory overlay.

// Tape deck
pub const DEFAULT_TAPE_COUNT: usize = 3;
pub const EMPTY_TAPE_TITLE: &str = "Empty Tape";
pub const UPLOADED_ARTIST: &str = "Unknown Artist";

// Dandelion field
pub const PARTICLE_COUNT: usize = 9;
pub const RECYCLE_MARGIN_PX: f32 = 60.0; // below the bottom edge before a seed respawns
pub const WRAP_MARGIN_PX: f32 = 50.0; // horizontal overshoot before wrapping
pub const SPAWN_Y_PX: f32 = -60.0; // respawn height, just above the top edge

pub const DRIFT_MAX: f32 = 0.4; // px per tick, either direction
pub const FALL_MIN: f32 = 0.15;
pub const FALL_MAX: f32 = 0.35;
pub const SEED_SIZE_MIN: f32 = 15.0;
pub const SEED_SIZE_MAX: f32 = 30.0;
pub const OPACITY_MIN: f32 = 0.5;
pub const OPACITY_MAX: f32 = 0.8;
pub const WOBBLE_SPEED_MIN: f32 = 0.02;
pub const WOBBLE_SPEED_MAX: f32 = 0.04;
pub const WOBBLE_DRIFT_AMPLITUDE: f32 = 0.2; // px added to drift
pub const WOBBLE_ROTATION_AMPLITUDE: f32 = 0.05; // radians added to tilt
pub const TILT_DRAG: f32 = 0.5; // tilt opposes drift
pub const TILT_JITTER: f32 = 0.1;
pub const FLUFF_COUNT_MIN: u32 = 8;
pub const FLUFF_COUNT_MAX: u32 = 13;
pub const FLUFF_SPREAD_MIN: f32 = 0.7; // fraction of a half turn
pub const FLUFF_SPREAD_MAX: f32 = 1.1;
pub const STEM_CURVE_MAX: f32 = 7.5;
pub const SEED_UNIT_SIZE: f32 = 20.0; // drawing units that map to `size` px

// Memory overlay
pub const MAX_MEMORY_IMAGES: usize = 20;
pub const MAX_NOTE_CHARS: usize = 100;
pub const SPAWN_INTERVAL_MS: u32 = 3000;
pub const MEMORY_DURATION_MIN_SEC: f32 = 8.0;
pub const MEMORY_DURATION_MAX_SEC: f32 = 13.0;
pub const MEMORY_X_PCT: (f32, f32) = (10.0, 90.0);
pub const MEMORY_Y_PCT: (f32, f32) = (20.0, 80.0);
pub const ROTATION_START_DEG: f32 = 5.0;
pub const ROTATION_MID_DEG: f32 = 10.0;
pub const ROTATION_END_DEG: f32 = 15.0;
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// (base, variance) in px
pub const IMAGE_SIZE_MOBILE: (f32, f32) = (80.0, 60.0);
pub const IMAGE_SIZE_DESKTOP: (f32, f32) = (140.0, 80.0);
pub const TEXT_SIZE_MOBILE: (f32, f32) = (110.0, 70.0);
pub const TEXT_SIZE_DESKTOP: (f32, f32) = (180.0, 100.0);

// Level meter
pub const METER_BARS: usize = 16;
pub const METER_REFRESH_MS: u64 = 100;
pub const METER_REST_PCT: f32 = 5.0;
pub const METER_MIN_PCT: f32 = 10.0;
pub const METER_MAX_PCT: f32 = 90.0;
