//! Confetti pattern
//!
//! Every tick the whole frame decays toward black; every 60 ms a single
//! pixel at a random position lights up with a random hue. The frame
//! buffer persists between ticks, so the decay produces soft tails.

use embassy_time::{Duration, Instant};

use super::Pattern;
use crate::{
    color::{Hsv, Rgb, hsv2rgb},
    math8::scale8,
    rng::Prng,
};

const SEED: u64 = 0xc0f_e771;
const SPAWN_INTERVAL: Duration = Duration::from_millis(60);
const FADE_SCALE: u8 = 234;
const SPAWN_SAT: u8 = 200;

#[derive(Debug, Clone)]
pub struct Confetti {
    rng: Prng,
    last_spawn: Instant,
}

impl Default for Confetti {
    fn default() -> Self {
        Self::new()
    }
}

impl Confetti {
    pub const fn new() -> Self {
        Self {
            rng: Prng::new(SEED),
            last_spawn: Instant::from_millis(0),
        }
    }
}

impl Pattern for Confetti {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        for led in leds.iter_mut() {
            led.r = scale8(led.r, FADE_SCALE);
            led.g = scale8(led.g, FADE_SCALE);
            led.b = scale8(led.b, FADE_SCALE);
        }

        if now.duration_since(self.last_spawn) >= SPAWN_INTERVAL {
            #[allow(clippy::cast_possible_truncation)]
            let index = self.rng.next_below(leds.len() as u32) as usize;
            leds[index] = hsv2rgb(Hsv {
                hue: self.rng.next_u8(),
                sat: SPAWN_SAT,
                val: 255,
            });
            self.last_spawn = now;
        }
    }

    fn reset(&mut self) {
        self.rng = Prng::new(SEED);
        self.last_spawn = Instant::from_millis(0);
    }
}
