//! Falling dandelion seeds.
//!
//! A fixed pool of particles advanced once per animation frame. Seeds that
//! fall out of view are re-rolled in place above the top edge, so the pool
//! never grows or shrinks and index order stays stable.

use crate::core::constants::*;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT_PX
    }
}

/// One pappus filament, in seed drawing units relative to the crown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Strand {
    pub ctrl: Vec2,
    pub tip: Vec2,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    /// x: sideways drift, y: fall speed (px per tick).
    pub vel: Vec2,
    pub size: f32,
    pub wobble_offset: f32,
    pub wobble_speed: f32,
    pub tilt: f32,
    pub opacity: f32,
    pub fluff_count: u32,
    pub fluff_spread: f32,
    pub stem_curve: f32,
    pub strands: SmallVec<[Strand; 16]>,
}

impl Particle {
    fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport, at_top: bool) -> Self {
        let drift = rng.gen_range(-DRIFT_MAX..=DRIFT_MAX);
        let x = rng.gen::<f32>() * viewport.width;
        let y = if at_top {
            SPAWN_Y_PX
        } else {
            rng.gen::<f32>() * viewport.height
        };
        let fluff_count = rng.gen_range(FLUFF_COUNT_MIN..=FLUFF_COUNT_MAX);
        let fluff_spread = rng.gen_range(FLUFF_SPREAD_MIN..=FLUFF_SPREAD_MAX);
        let mut p = Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(drift, rng.gen_range(FALL_MIN..=FALL_MAX)),
            size: rng.gen_range(SEED_SIZE_MIN..=SEED_SIZE_MAX),
            wobble_offset: rng.gen::<f32>() * TAU,
            wobble_speed: rng.gen_range(WOBBLE_SPEED_MIN..=WOBBLE_SPEED_MAX),
            tilt: -drift * TILT_DRAG + rng.gen_range(-TILT_JITTER..=TILT_JITTER),
            opacity: rng.gen_range(OPACITY_MIN..=OPACITY_MAX),
            fluff_count,
            fluff_spread,
            stem_curve: rng.gen_range(-STEM_CURVE_MAX..=STEM_CURVE_MAX),
            strands: SmallVec::new(),
        };
        p.strands = build_strands(rng, fluff_count, fluff_spread);
        p
    }

    #[inline]
    fn wobble_phase(&self, time: f32) -> f32 {
        (time * self.wobble_speed + self.wobble_offset).sin()
    }

    /// Rotation used when drawing: static tilt plus a slight sway.
    #[inline]
    pub fn rotation(&self, time: f32) -> f32 {
        self.tilt + self.wobble_phase(time) * WOBBLE_ROTATION_AMPLITUDE
    }

    /// Drawing-unit to pixel scale.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.size / SEED_UNIT_SIZE
    }
}

// Crown sits at (0, -5) in drawing units; strands fan upwards from it.
pub const CROWN: Vec2 = Vec2::new(0.0, -5.0);

fn build_strands<R: Rng + ?Sized>(
    rng: &mut R,
    fluff_count: u32,
    fluff_spread: f32,
) -> SmallVec<[Strand; 16]> {
    let spread = PI * fluff_spread;
    let denom = (fluff_count.max(2) - 1) as f32;
    (0..fluff_count)
        .map(|i| {
            let base = -PI / 2.0 + (i as f32 / denom - 0.5) * spread;
            let angle = base + rng.gen_range(-0.05..=0.05);
            let length = rng.gen_range(14.0..=22.0);
            let dir = Vec2::new(angle.cos(), angle.sin());
            let jitter = Vec2::new(rng.gen_range(-1.5..=1.5), 0.0);
            Strand {
                ctrl: CROWN + dir * (length * 0.6) + jitter,
                tip: CROWN + dir * length,
            }
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub recycle_margin: f32,
    pub wrap_margin: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            recycle_margin: RECYCLE_MARGIN_PX,
            wrap_margin: WRAP_MARGIN_PX,
        }
    }
}

pub struct ParticleField {
    pub params: FieldParams,
    particles: Vec<Particle>,
    viewport: Viewport,
    time: f32,
    active: bool,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: FieldParams, viewport: Viewport, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..params.count)
            .map(|_| Particle::spawn(&mut rng, viewport, false))
            .collect();
        Self {
            params,
            particles,
            viewport,
            time: 0.0,
            active: false,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true when the gate actually changed.
    pub fn set_active(&mut self, active: bool) -> bool {
        if self.active == active {
            return false;
        }
        self.active = active;
        true
    }

    /// Existing particle coordinates are left as they are.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advance one frame. Does nothing while the field is gated off.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.time += 1.0;
        let Viewport { width, height } = self.viewport;
        let FieldParams {
            recycle_margin,
            wrap_margin,
            ..
        } = self.params;
        for p in self.particles.iter_mut() {
            let wobble = p.wobble_phase(self.time) * WOBBLE_DRIFT_AMPLITUDE;
            p.pos.x += p.vel.x + wobble;
            p.pos.y += p.vel.y;

            if p.pos.y > height + recycle_margin {
                *p = Particle::spawn(&mut self.rng, self.viewport, true);
            }
            if p.pos.x > width + wrap_margin {
                p.pos.x = -wrap_margin;
            } else if p.pos.x < -wrap_margin {
                p.pos.x = width + wrap_margin;
            }
        }
        true
    }
}
