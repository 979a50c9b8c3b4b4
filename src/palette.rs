//! Shared palette rotation policy
//!
//! Breathing and chase both step through the same fixed color sequence:
//! every few completed pattern cycles they crossfade to the next palette
//! entry. The counting and fading live here so both patterns stay in
//! lockstep with the same policy.

use crate::color::{Rgb, blend_colors, rgb_from_u32};
use crate::transition::ColorTransition;

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

// Rotation order: cyan -> magenta -> yellow -> green -> blue -> red
#[allow(clippy::unreadable_literal)]
pub const ROTATION_PALETTE: [Rgb; 6] = hex_palette![
    0x00FFFF, // Cyan
    0xFF00FF, // Magenta
    0xFFFF00, // Yellow
    0x008000, // Green
    0x0000FF, // Blue
    0xFF0000  // Red
];

/// Completed pattern cycles between palette steps
pub const CYCLES_PER_COLOR: u32 = 3;

/// Sub-updates one crossfade spans (~1s at the breathing cadence)
pub const TRANSITION_STEPS: u16 = 20;

/// Cyclic palette walker with crossfaded color changes.
#[derive(Debug, Clone)]
pub struct PaletteRotation {
    index: usize,
    cycles: u32,
    transition: ColorTransition,
}

impl Default for PaletteRotation {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteRotation {
    pub const fn new() -> Self {
        Self {
            index: 0,
            cycles: 0,
            transition: ColorTransition::new(ROTATION_PALETTE[0], TRANSITION_STEPS),
        }
    }

    /// Record one completed pattern cycle
    ///
    /// Once enough cycles accumulate and no fade is already in flight,
    /// arms a crossfade to the next palette entry.
    pub fn complete_cycle(&mut self) {
        self.cycles += 1;
        if self.cycles >= CYCLES_PER_COLOR && !self.transition.is_active() {
            let next = ROTATION_PALETTE[(self.index + 1) % ROTATION_PALETTE.len()];
            self.transition.begin(next);
            self.cycles = 0;
        }
    }

    /// Advance the crossfade by one sub-update
    pub fn step(&mut self) {
        if self.transition.advance() {
            self.index = (self.index + 1) % ROTATION_PALETTE.len();
        }
    }

    /// Re-anchor the rotation on `color`, cancelling any fade in flight
    ///
    /// The palette index is untouched, so the next rotation continues
    /// from where it left off.
    pub fn set_color(&mut self, color: Rgb) {
        self.transition.snap_to(color);
        self.cycles = 0;
    }

    /// Current display color
    pub const fn current(&self) -> Rgb {
        self.transition.current()
    }

    /// Index of the most recently adopted palette entry
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }
}

/// Sample a palette at position t (0-255)
///
/// Maps t across N colors (N-1 segments) with blending between the two
/// surrounding entries.
#[allow(clippy::cast_possible_truncation)]
pub fn sample_palette(palette: &[Rgb], t: u8) -> Rgb {
    let segments = palette.len().saturating_sub(1);
    if segments == 0 {
        return palette.first().copied().unwrap_or(Rgb { r: 0, g: 0, b: 0 });
    }

    let scaled = u16::from(t) * (segments as u16); // 0..255*(N-1)
    let segment = (scaled >> 8).min(segments.saturating_sub(1) as u16) as usize;
    let local_t = (scaled & 0xFF) as u8;

    blend_colors(palette[segment], palette[segment + 1], local_t)
}
