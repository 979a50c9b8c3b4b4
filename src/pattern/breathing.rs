//! Breathing pattern
//!
//! A whole-strip brightness wave on a sinusoidal curve. The phase counter
//! advances on a fixed 50 ms sub-interval rather than every tick, so the
//! breath speed is independent of the scheduler cadence. Every third
//! completed breath the display color crossfades to the next palette
//! entry.

use embassy_time::{Duration, Instant};

use super::Pattern;
use crate::{
    color::Rgb,
    math8::{scale8, sin8},
    palette::PaletteRotation,
};

const UPDATE_INTERVAL: Duration = Duration::from_millis(50);
const PHASE_STEP: u8 = 4;

// Phase 0 lands on the dark end of the sine, giving a 0 -> 255 -> 0
// brightness curve per wrap of the phase counter.
const PHASE_DARK_OFFSET: u8 = 64;

#[derive(Debug, Clone)]
pub struct Breathing {
    phase: u8,
    last_update: Instant,
    rotation: PaletteRotation,
}

impl Default for Breathing {
    fn default() -> Self {
        Self::new()
    }
}

impl Breathing {
    pub const fn new() -> Self {
        Self {
            phase: 0,
            last_update: Instant::from_millis(0),
            rotation: PaletteRotation::new(),
        }
    }

    /// Index of the current palette entry
    pub const fn palette_index(&self) -> usize {
        self.rotation.index()
    }

    /// Check if a palette crossfade is in progress
    pub const fn is_transitioning(&self) -> bool {
        self.rotation.is_transitioning()
    }
}

impl Pattern for Breathing {
    fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if now.duration_since(self.last_update) >= UPDATE_INTERVAL {
            let next_phase = self.phase.wrapping_add(PHASE_STEP);
            if next_phase < PHASE_STEP {
                // Phase wrapped: one full breath completed
                self.rotation.complete_cycle();
            }
            self.phase = next_phase;
            self.rotation.step();
            self.last_update = now;
        }

        let fade = sin8(self.phase.wrapping_sub(PHASE_DARK_OFFSET));
        let color = self.rotation.current();

        for led in leds {
            *led = Rgb {
                r: scale8(color.r, fade),
                g: scale8(color.g, fade),
                b: scale8(color.b, fade),
            };
        }
    }

    fn reset(&mut self) {
        self.phase = 0;
        self.last_update = Instant::from_millis(0);
        self.rotation = PaletteRotation::new();
    }

    fn set_color(&mut self, color: Rgb) {
        self.rotation.set_color(color);
    }
}
