//! Twin dots pattern
//!
//! Two dots in complementary hues sweep the strip in opposite directions
//! on a triangle wave. Purely time-driven; no per-tick counters.

use embassy_time::Instant;

use super::Pattern;
use crate::color::{Hsv, Rgb, hsv2rgb};
use crate::math8::triangle8;

const SWEEP_PERIOD_MS: u64 = 2_000;
const HUE_A: u8 = 140;
// Opposite side of the hue circle
const HUE_B: u8 = 12;

#[derive(Debug, Clone)]
pub struct TwinDots;

impl Default for TwinDots {
    fn default() -> Self {
        Self::new()
    }
}

impl TwinDots {
    pub const fn new() -> Self {
        Self
    }
}

impl Pattern for TwinDots {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let progress_ms = now.as_millis() % SWEEP_PERIOD_MS;
        #[allow(clippy::cast_possible_truncation)]
        let phase = ((progress_ms * 255) / SWEEP_PERIOD_MS) as u8;
        let sweep = triangle8(phase);

        let last = leds.len() - 1;
        let position = (usize::from(sweep) * last) / 254;
        let mirrored = last - position;

        for led in leds.iter_mut() {
            *led = Rgb { r: 0, g: 0, b: 0 };
        }
        leds[position] = hsv2rgb(Hsv {
            hue: HUE_A,
            sat: 255,
            val: 255,
        });
        leds[mirrored] = hsv2rgb(Hsv {
            hue: HUE_B,
            sat: 255,
            val: 255,
        });
    }
}
