//! Remote command surface
//!
//! The transport parses its own wire format and hands the core typed
//! commands. Numeric parameters arrive as wide integers so out-of-range
//! remote input is representable here and clamped or rejected inside the
//! core instead of propagating.

use crate::pattern::PatternId;

/// A remote operation, one per transport endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Query the current status
    GetStatus,
    /// Select an animation mode by raw id
    SetMode(u8),
    /// Set the global brightness (clamped to 0-255)
    SetBrightness(i32),
    /// Set the shared base color (each channel clamped to 0-255)
    SetColor { r: i32, g: i32, b: i32 },
    /// Blank the strip until a mode is selected again
    Clear,
    /// Flip automatic (sensor-driven) mode switching
    ToggleAuto,
    /// Flip direct manual control of the strip
    ToggleManual,
}

/// Commands rejected without mutating core state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The requested mode id is outside the supported set
    UnknownMode(u8),
}

/// Acknowledgement returned for every accepted command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub mode: PatternId,
    pub auto_mode: bool,
    pub manual_mode: bool,
    pub cleared: bool,
}
