//! Palette beat pattern
//!
//! A slow gradient sweep through a warm palette, pulsed by a faster
//! sinusoidal beat envelope. Both phases derive from wall-clock time.

use embassy_time::Instant;

use super::Pattern;
use crate::{
    color::{Rgb, rgb_from_u32},
    math8::{scale8, sin8},
    palette::sample_palette,
};

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

// Warm party palette: red -> orange -> gold -> pink
#[allow(clippy::unreadable_literal)]
const BEAT_PALETTE: [Rgb; 5] = hex_palette![
    0xD10038, // Deep red
    0xFF5000, // Orange
    0xFFC81E, // Gold
    0xF2039F, // Pink
    0x8800FF  // Violet
];

const SWEEP_PERIOD_MS: u64 = 9_000;
const BEAT_PERIOD_MS: u64 = 1_500;
// Keep the envelope from going fully dark between beats
const ENVELOPE_FLOOR: u8 = 48;

#[derive(Debug, Clone)]
pub struct PaletteBeat;

impl Default for PaletteBeat {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteBeat {
    pub const fn new() -> Self {
        Self
    }

    #[allow(clippy::cast_possible_truncation)]
    fn phase(now: Instant, period_ms: u64) -> u8 {
        let progress_ms = now.as_millis() % period_ms;
        ((progress_ms * 255) / period_ms) as u8
    }
}

impl Pattern for PaletteBeat {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let sweep = Self::phase(now, SWEEP_PERIOD_MS);
        let envelope = sin8(Self::phase(now, BEAT_PERIOD_MS)).max(ENVELOPE_FLOOR);

        let len = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let offset = ((i * 255) / len) as u8;
            let color = sample_palette(&BEAT_PALETTE, sweep.wrapping_add(offset));
            *led = Rgb {
                r: scale8(color.r, envelope),
                g: scale8(color.g, envelope),
                b: scale8(color.b, envelope),
            };
        }
    }
}
