use crate::core::constants::*;
use rand::prelude::*;
use std::time::Duration;

/// Decorative level bars on the deck display. They jump to random heights
/// while a tape plays and settle low when it stops.
pub struct LevelMeter {
    bars: [f32; METER_BARS],
    accum: Duration,
    rng: StdRng,
}

impl LevelMeter {
    pub fn new(seed: u64) -> Self {
        Self {
            bars: [METER_REST_PCT; METER_BARS],
            accum: Duration::ZERO,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Bar heights in percent.
    pub fn bars(&self) -> &[f32] {
        &self.bars
    }

    /// Returns true when the bars changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.accum += dt;
        let step = Duration::from_millis(METER_REFRESH_MS);
        if self.accum < step {
            return false;
        }
        // Long stalls (hidden tab) only produce one refresh.
        self.accum = Duration::from_nanos((self.accum.as_nanos() % step.as_nanos()) as u64);
        for bar in self.bars.iter_mut() {
            *bar = self.rng.gen_range(METER_MIN_PCT..=METER_MAX_PCT);
        }
        true
    }

    pub fn rest(&mut self) {
        self.bars = [METER_REST_PCT; METER_BARS];
        self.accum = Duration::ZERO;
    }
}
