//! Pattern system with compile-time known pattern variants
//!
//! All patterns are stored in an enum to avoid heap allocations.
//! Each pattern implements the `Pattern` trait and owns its private
//! counters; rebuilding the slot is what resets a pattern's state.

mod beat;
mod breathing;
mod chase;
mod confetti;
mod flash;
mod rainbow;
mod sparkle;
mod twin_dots;

use embassy_time::Instant;

pub use beat::PaletteBeat;
pub use breathing::Breathing;
pub use chase::Chase;
pub use confetti::Confetti;
pub use flash::RandomFlash;
pub use rainbow::RainbowSweep;
pub use sparkle::Sparkle;
pub use twin_dots::TwinDots;

use crate::color::Rgb;

const PATTERN_NAME_RAINBOW: &str = "rainbow";
const PATTERN_NAME_FLASH: &str = "flash";
const PATTERN_NAME_BREATHING: &str = "breathing";
const PATTERN_NAME_CHASE: &str = "chase";
const PATTERN_NAME_CONFETTI: &str = "confetti";
const PATTERN_NAME_SPARKLE: &str = "sparkle";
const PATTERN_NAME_TWIN_DOTS: &str = "twin_dots";
const PATTERN_NAME_BEAT: &str = "beat";

const PATTERN_ID_RAINBOW: u8 = 0;
const PATTERN_ID_FLASH: u8 = 1;
const PATTERN_ID_BREATHING: u8 = 2;
const PATTERN_ID_CHASE: u8 = 3;
const PATTERN_ID_CONFETTI: u8 = 4;
const PATTERN_ID_SPARKLE: u8 = 5;
const PATTERN_ID_TWIN_DOTS: u8 = 6;
const PATTERN_ID_BEAT: u8 = 7;

pub trait Pattern {
    /// Render a single frame
    ///
    /// Called once per scheduler tick; must be non-blocking and bounded
    /// by the strip length.
    fn render(&mut self, now: Instant, leds: &mut [Rgb]);

    /// Reset pattern state
    fn reset(&mut self) {}

    /// Update the base color, for patterns that honor one
    fn set_color(&mut self, _color: Rgb) {}
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone)]
pub enum PatternSlot {
    /// Rainbow hue sweep across the strip
    Rainbow(RainbowSweep),
    /// Per-pixel random colors every tick
    Flash(RandomFlash),
    /// Sinusoidal breathing with palette rotation
    Breathing(Breathing),
    /// Running dot with a fading trail
    Chase(Chase),
    /// Fading sprinkle of random-hue pixels
    Confetti(Confetti),
    /// Dim base wash with white glitter
    Sparkle(Sparkle),
    /// Two mirrored dots sweeping the strip
    TwinDots(TwinDots),
    /// Palette gradient pulsing to a beat envelope
    Beat(PaletteBeat),
}

/// Known pattern ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    Rainbow = PATTERN_ID_RAINBOW,
    Flash = PATTERN_ID_FLASH,
    Breathing = PATTERN_ID_BREATHING,
    Chase = PATTERN_ID_CHASE,
    Confetti = PATTERN_ID_CONFETTI,
    Sparkle = PATTERN_ID_SPARKLE,
    TwinDots = PATTERN_ID_TWIN_DOTS,
    Beat = PATTERN_ID_BEAT,
}

impl Default for PatternSlot {
    fn default() -> Self {
        Self::Rainbow(RainbowSweep::new())
    }
}

impl PatternId {
    /// Number of supported patterns
    pub const COUNT: u8 = 8;

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_RAINBOW => Self::Rainbow,
            PATTERN_ID_FLASH => Self::Flash,
            PATTERN_ID_BREATHING => Self::Breathing,
            PATTERN_ID_CHASE => Self::Chase,
            PATTERN_ID_CONFETTI => Self::Confetti,
            PATTERN_ID_SPARKLE => Self::Sparkle,
            PATTERN_ID_TWIN_DOTS => Self::TwinDots,
            PATTERN_ID_BEAT => Self::Beat,
            _ => return None,
        })
    }

    /// Next pattern in the fixed cyclic order
    pub fn next(self) -> Self {
        Self::from_raw((self as u8 + 1) % Self::COUNT).unwrap_or(Self::Rainbow)
    }

    pub fn to_slot(self, color: Rgb) -> PatternSlot {
        match self {
            Self::Rainbow => PatternSlot::Rainbow(RainbowSweep::new()),
            Self::Flash => PatternSlot::Flash(RandomFlash::new()),
            Self::Breathing => PatternSlot::Breathing(Breathing::new()),
            Self::Chase => PatternSlot::Chase(Chase::new()),
            Self::Confetti => PatternSlot::Confetti(Confetti::new()),
            Self::Sparkle => PatternSlot::Sparkle(Sparkle::new(color)),
            Self::TwinDots => PatternSlot::TwinDots(TwinDots::new()),
            Self::Beat => PatternSlot::Beat(PaletteBeat::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => PATTERN_NAME_RAINBOW,
            Self::Flash => PATTERN_NAME_FLASH,
            Self::Breathing => PATTERN_NAME_BREATHING,
            Self::Chase => PATTERN_NAME_CHASE,
            Self::Confetti => PATTERN_NAME_CONFETTI,
            Self::Sparkle => PATTERN_NAME_SPARKLE,
            Self::TwinDots => PATTERN_NAME_TWIN_DOTS,
            Self::Beat => PATTERN_NAME_BEAT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_RAINBOW => Some(Self::Rainbow),
            PATTERN_NAME_FLASH => Some(Self::Flash),
            PATTERN_NAME_BREATHING => Some(Self::Breathing),
            PATTERN_NAME_CHASE => Some(Self::Chase),
            PATTERN_NAME_CONFETTI => Some(Self::Confetti),
            PATTERN_NAME_SPARKLE => Some(Self::Sparkle),
            PATTERN_NAME_TWIN_DOTS => Some(Self::TwinDots),
            PATTERN_NAME_BEAT => Some(Self::Beat),
            _ => None,
        }
    }
}

impl PatternSlot {
    /// Render the current pattern
    pub fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        match self {
            Self::Rainbow(pattern) => pattern.render(now, leds),
            Self::Flash(pattern) => pattern.render(now, leds),
            Self::Breathing(pattern) => pattern.render(now, leds),
            Self::Chase(pattern) => pattern.render(now, leds),
            Self::Confetti(pattern) => pattern.render(now, leds),
            Self::Sparkle(pattern) => pattern.render(now, leds),
            Self::TwinDots(pattern) => pattern.render(now, leds),
            Self::Beat(pattern) => pattern.render(now, leds),
        }
    }

    /// Reset the pattern state
    pub fn reset(&mut self) {
        match self {
            Self::Rainbow(pattern) => Pattern::reset(pattern),
            Self::Flash(pattern) => Pattern::reset(pattern),
            Self::Breathing(pattern) => Pattern::reset(pattern),
            Self::Chase(pattern) => Pattern::reset(pattern),
            Self::Confetti(pattern) => Pattern::reset(pattern),
            Self::Sparkle(pattern) => Pattern::reset(pattern),
            Self::TwinDots(pattern) => Pattern::reset(pattern),
            Self::Beat(pattern) => Pattern::reset(pattern),
        }
    }

    /// Get the pattern ID for external observation
    pub fn id(&self) -> PatternId {
        match self {
            Self::Rainbow(_) => PatternId::Rainbow,
            Self::Flash(_) => PatternId::Flash,
            Self::Breathing(_) => PatternId::Breathing,
            Self::Chase(_) => PatternId::Chase,
            Self::Confetti(_) => PatternId::Confetti,
            Self::Sparkle(_) => PatternId::Sparkle,
            Self::TwinDots(_) => PatternId::TwinDots,
            Self::Beat(_) => PatternId::Beat,
        }
    }

    /// Update the base color of the current pattern
    ///
    /// Only patterns that honor a configurable base color react.
    pub fn set_color(&mut self, color: Rgb) {
        match self {
            Self::Breathing(pattern) => pattern.set_color(color),
            Self::Sparkle(pattern) => pattern.set_color(color),
            _ => {}
        }
    }
}
