//! Sensor debouncing and the manual control surface
//!
//! The vibration sensor chatters around its physical threshold, so a raw
//! active level only counts as a new trigger once the debounce window has
//! passed since the last accepted one. This module also owns the shared
//! brightness and base color that the remote surface mutates.

use embassy_time::{Duration, Instant};

use crate::color::Rgb;

/// Default debounce window between accepted sensor triggers
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(600);

pub struct TriggerController {
    last_trigger: Instant,
    debounce: Duration,
    auto_mode: bool,
    manual_mode: bool,
    brightness: u8,
    color: Rgb,
}

impl TriggerController {
    pub const fn new(debounce: Duration, brightness: u8, color: Rgb) -> Self {
        Self {
            last_trigger: Instant::from_millis(0),
            debounce,
            auto_mode: true,
            manual_mode: false,
            brightness,
            color,
        }
    }

    /// Evaluate one sensor reading
    ///
    /// Returns `true` when the reading counts as a fresh debounced
    /// trigger; the caller advances the mode. Inactive levels, disabled
    /// auto mode, and readings inside the debounce window all return
    /// `false`.
    pub fn poll_sensor(&mut self, active: bool, now: Instant) -> bool {
        if !self.auto_mode || !active {
            return false;
        }
        if now.duration_since(self.last_trigger) <= self.debounce {
            return false;
        }
        self.last_trigger = now;
        true
    }

    pub fn set_auto_mode(&mut self, enabled: bool) {
        self.auto_mode = enabled;
    }

    /// Flip auto mode, returning the new value
    pub fn toggle_auto(&mut self) -> bool {
        self.auto_mode = !self.auto_mode;
        self.auto_mode
    }

    pub fn set_manual_mode(&mut self, enabled: bool) {
        self.manual_mode = enabled;
    }

    /// Flip manual mode, returning the new value
    pub fn toggle_manual(&mut self) -> bool {
        self.manual_mode = !self.manual_mode;
        self.manual_mode
    }

    /// Clamp and store the shared brightness, returning the applied value
    pub fn set_brightness(&mut self, value: i32) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let clamped = value.clamp(0, 255) as u8;
        self.brightness = clamped;
        clamped
    }

    /// Clamp and store the shared base color, returning the applied value
    pub fn set_color(&mut self, r: i32, g: i32, b: i32) -> Rgb {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let color = Rgb {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        };
        self.color = color;
        color
    }

    pub const fn auto_mode(&self) -> bool {
        self.auto_mode
    }

    pub const fn manual_mode(&self) -> bool {
        self.manual_mode
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}
