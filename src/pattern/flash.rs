//! Random flash
//!
//! Redraws every pixel with an independently drawn random color on each
//! tick. No state beyond the generator.

use embassy_time::Instant;

use super::Pattern;
use crate::{color::Rgb, rng::Prng};

const SEED: u64 = 0x5eed_1ed5;

#[derive(Debug, Clone)]
pub struct RandomFlash {
    rng: Prng,
}

impl Default for RandomFlash {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomFlash {
    pub const fn new() -> Self {
        Self {
            rng: Prng::new(SEED),
        }
    }
}

impl Pattern for RandomFlash {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        for led in leds {
            *led = Rgb {
                r: self.rng.next_u8(),
                g: self.rng.next_u8(),
                b: self.rng.next_u8(),
            };
        }
    }

    fn reset(&mut self) {
        self.rng = Prng::new(SEED);
    }
}
