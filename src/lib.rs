#![no_std]

pub mod color;
pub mod command;
pub mod dispatcher;
pub mod lifecycle;
pub mod math8;
pub mod palette;
pub mod pattern;
pub mod queue;
pub mod rng;
pub mod scheduler;
pub mod transition;
pub mod trigger;

pub use command::{Command, CommandError, Status};
pub use dispatcher::ModeDispatcher;
pub use lifecycle::PowerLifecycle;
pub use palette::PaletteRotation;
pub use pattern::{PatternId, PatternSlot};
pub use queue::{CommandQueue, CommandReceiver, CommandSender};
pub use scheduler::{Scheduler, SchedulerConfig, TICK_INTERVAL, TickResult};
pub use transition::ColorTransition;
pub use trigger::TriggerController;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The scheduler is generic over this trait and assumes `write` is
/// synchronous and bounded-latency.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Platform hooks invoked during the idle shutdown sequence.
///
/// The scheduler calls these in order when the idle timeout expires:
/// transport first, then the access point, then deep sleep. After
/// `enter_deep_sleep` returns, the scheduler stays in its terminal
/// asleep state; wake requires an external hardware reset.
pub trait PowerDriver {
    /// Stop the remote-command transport
    fn stop_transport(&mut self);

    /// Release the wireless access point
    fn release_access_point(&mut self);

    /// Enter the minimal-power sleep state
    fn enter_deep_sleep(&mut self);
}
