//! Mode dispatch and the blank overlay
//!
//! Owns the active pattern slot. Switching modes rebuilds the slot, which
//! is what wholesale-resets the previous pattern's private counters;
//! transitions are total and complete within the same tick.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::pattern::{PatternId, PatternSlot};

pub struct ModeDispatcher {
    slot: PatternSlot,
    entered_at: Instant,
    cleared: bool,
}

impl ModeDispatcher {
    pub fn new(mode: PatternId, color: Rgb, now: Instant) -> Self {
        Self {
            slot: mode.to_slot(color),
            entered_at: now,
            cleared: false,
        }
    }

    /// Switch to `mode`, resetting all per-mode state
    ///
    /// Also re-arms rendering: a newly selected animation must render.
    pub fn set_mode(&mut self, mode: PatternId, color: Rgb, now: Instant) {
        self.slot = mode.to_slot(color);
        self.slot.reset();
        self.entered_at = now;
        self.cleared = false;

        #[cfg(feature = "esp32-log")]
        println!("[dispatcher] mode -> {}", mode.as_str());
    }

    /// Step to the next mode in the fixed cyclic order
    pub fn advance_mode(&mut self, color: Rgb, now: Instant) -> PatternId {
        let next = self.mode().next();
        self.set_mode(next, color, now);
        next
    }

    /// Enter the blank overlay: render all-dark and suppress the pattern
    pub fn clear(&mut self) {
        self.cleared = true;
    }

    /// Leave the blank overlay without touching pattern state
    pub fn rearm(&mut self) {
        self.cleared = false;
    }

    pub const fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn mode(&self) -> PatternId {
        self.slot.id()
    }

    /// Timestamp of the last mode entry
    pub const fn entered_at(&self) -> Instant {
        self.entered_at
    }

    /// Forward a base-color change to the active pattern
    pub fn set_color(&mut self, color: Rgb) {
        self.slot.set_color(color);
    }

    /// Produce one frame into `frame`
    ///
    /// While the blank overlay is active the frame is forced dark and
    /// the pattern does not advance.
    pub fn render_into(&mut self, now: Instant, frame: &mut [Rgb]) {
        if self.cleared {
            for led in frame.iter_mut() {
                *led = Rgb { r: 0, g: 0, b: 0 };
            }
            return;
        }
        self.slot.render(now, frame);
    }
}
