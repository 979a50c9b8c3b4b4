//! Chase pattern
//!
//! A bright head pixel running along the strip with a trail of three
//! progressively halved copies behind it. The head advances on a fixed
//! 100 ms sub-interval; one full revolution of the strip counts as one
//! cycle toward the shared palette rotation.

use embassy_time::{Duration, Instant};

use super::Pattern;
use crate::{color::Rgb, palette::PaletteRotation};

const UPDATE_INTERVAL: Duration = Duration::from_millis(100);
const TRAIL_LEN: usize = 3;

#[derive(Debug, Clone)]
pub struct Chase {
    position: usize,
    last_update: Instant,
    rotation: PaletteRotation,
}

impl Default for Chase {
    fn default() -> Self {
        Self::new()
    }
}

impl Chase {
    pub const fn new() -> Self {
        Self {
            position: 0,
            last_update: Instant::from_millis(0),
            rotation: PaletteRotation::new(),
        }
    }
}

impl Pattern for Chase {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        if now.duration_since(self.last_update) >= UPDATE_INTERVAL {
            let previous = self.position;
            self.position = (self.position + 1) % leds.len();
            if previous == leds.len() - 1 && self.position == 0 {
                // Wrapped back to the start: one full revolution
                self.rotation.complete_cycle();
            }
            self.rotation.step();
            self.last_update = now;
        }

        for led in leds.iter_mut() {
            *led = Rgb { r: 0, g: 0, b: 0 };
        }

        let head = self.rotation.current();
        let position = self.position.min(leds.len() - 1);
        leds[position] = head;
        for k in 1..=TRAIL_LEN {
            if position < k {
                break;
            }
            #[allow(clippy::cast_possible_truncation)]
            let shift = k as u8;
            leds[position - k] = Rgb {
                r: head.r >> shift,
                g: head.g >> shift,
                b: head.b >> shift,
            };
        }
    }

    fn reset(&mut self) {
        self.position = 0;
        self.last_update = Instant::from_millis(0);
        self.rotation = PaletteRotation::new();
    }
}
