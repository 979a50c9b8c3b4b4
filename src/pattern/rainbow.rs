//! Rainbow hue sweep
//!
//! Walks a hue offset around the color circle and spreads the full hue
//! range across the strip, so the whole rainbow drifts one step per tick.

use embassy_time::Instant;

use super::Pattern;
use crate::color::{Hsv, Rgb, hsv2rgb};

const HUE_STEP: u8 = 3;
const SATURATION: u8 = 255;
const VALUE: u8 = 255;

#[derive(Debug, Clone)]
pub struct RainbowSweep {
    hue: u8,
}

impl Default for RainbowSweep {
    fn default() -> Self {
        Self::new()
    }
}

impl RainbowSweep {
    pub const fn new() -> Self {
        Self { hue: 0 }
    }
}

impl Pattern for RainbowSweep {
    fn render(&mut self, _now: Instant, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        self.hue = self.hue.wrapping_add(HUE_STEP);

        let len = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let spread = ((i * 255) / len) as u8;
            *led = hsv2rgb(Hsv {
                hue: self.hue.wrapping_add(spread),
                sat: SATURATION,
                val: VALUE,
            });
        }
    }

    fn reset(&mut self) {
        self.hue = 0;
    }
}
