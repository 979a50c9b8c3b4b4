//! Sparkle pattern
//!
//! A dim wash of the shared base color with short-lived white glitter
//! thrown on top. Honors the remote set-color operation.

use embassy_time::Instant;

use super::Pattern;
use crate::{color::Rgb, math8::scale8, rng::Prng};

const SEED: u64 = 0x51a7_71e5;
const BASE_SCALE: u8 = 40;
// Glitter probability per tick, out of 256
const GLITTER_CHANCE: u8 = 64;

const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

#[derive(Debug, Clone)]
pub struct Sparkle {
    base: Rgb,
    rng: Prng,
}

impl Sparkle {
    pub const fn new(base: Rgb) -> Self {
        Self {
            base,
            rng: Prng::new(SEED),
        }
    }
}

impl Pattern for Sparkle {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let wash = Rgb {
            r: scale8(self.base.r, BASE_SCALE),
            g: scale8(self.base.g, BASE_SCALE),
            b: scale8(self.base.b, BASE_SCALE),
        };
        for led in leds.iter_mut() {
            *led = wash;
        }

        if self.rng.next_u8() < GLITTER_CHANCE {
            #[allow(clippy::cast_possible_truncation)]
            let index = self.rng.next_below(leds.len() as u32) as usize;
            leds[index] = WHITE;
        }
    }

    fn reset(&mut self) {
        self.rng = Prng::new(SEED);
    }

    fn set_color(&mut self, color: Rgb) {
        self.base = color;
    }
}
