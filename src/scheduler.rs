//! Cooperative tick loop
//!
//! One tick services pending remote commands, polls the sensor, advances
//! the active pattern into the frame buffer, writes the frame, and checks
//! the idle lifecycle. Nothing blocks; waiting is expressed as wall-clock
//! comparisons against stored timestamps, and the caller owns the actual
//! inter-tick wait using the returned timing info.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::command::{Command, CommandError, Status};
use crate::dispatcher::ModeDispatcher;
use crate::lifecycle::{DEFAULT_IDLE_TIMEOUT, PowerLifecycle};
use crate::math8::scale8;
use crate::pattern::PatternId;
use crate::queue::CommandReceiver;
use crate::trigger::{DEFAULT_DEBOUNCE, TriggerController};
use crate::{OutputDriver, PowerDriver};

/// Scheduler tick cadence (~33 FPS)
pub const TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Startup configuration for the scheduler.
#[derive(Clone)]
pub struct SchedulerConfig {
    pub mode: PatternId,
    pub brightness: u8,
    pub color: Rgb,
    pub debounce: Duration,
    /// Zero disables the idle shutdown entirely
    pub idle_timeout: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            mode: PatternId::Rainbow,
            brightness: 255,
            color: Rgb {
                r: 0,
                g: 255,
                b: 255,
            },
            debounce: DEFAULT_DEBOUNCE,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

/// Result of one scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Set once the idle shutdown has run; further ticks are no-ops.
    pub asleep: bool,
}

/// The toy's single thread of control.
///
/// Owns the frame buffer and every piece of animation, trigger, and
/// lifecycle state; all of it is mutated only from `tick`, so no locking
/// is needed anywhere.
///
/// # Usage
///
/// ```ignore
/// let queue = CommandQueue::new();
/// let mut scheduler = Scheduler::<_, _, 8, 8>::new(
///     strip, platform, queue.receiver(), &SchedulerConfig::default(), now,
/// );
///
/// loop {
///     let result = scheduler.tick(read_sensor(), Instant::now());
///     // Platform-specific wait until result.next_deadline
/// }
/// ```
pub struct Scheduler<'a, O, P, const LED_COUNT: usize, const QUEUE_SIZE: usize>
where
    O: OutputDriver,
    P: PowerDriver,
{
    output: O,
    power: P,
    commands: CommandReceiver<'a, QUEUE_SIZE>,

    dispatcher: ModeDispatcher,
    trigger: TriggerController,
    lifecycle: PowerLifecycle,

    frame: [Rgb; LED_COUNT],
    next_tick: Instant,
}

impl<'a, O, P, const LED_COUNT: usize, const QUEUE_SIZE: usize>
    Scheduler<'a, O, P, LED_COUNT, QUEUE_SIZE>
where
    O: OutputDriver,
    P: PowerDriver,
{
    pub fn new(
        output: O,
        power: P,
        commands: CommandReceiver<'a, QUEUE_SIZE>,
        config: &SchedulerConfig,
        now: Instant,
    ) -> Self {
        Self {
            output,
            power,
            commands,
            dispatcher: ModeDispatcher::new(config.mode, config.color, now),
            trigger: TriggerController::new(config.debounce, config.brightness, config.color),
            lifecycle: PowerLifecycle::new(config.idle_timeout, now),
            frame: [Rgb { r: 0, g: 0, b: 0 }; LED_COUNT],
            next_tick: Instant::from_millis(0),
        }
    }

    /// Run one tick of the cooperative loop.
    ///
    /// `sensor_active` is the already-thresholded binary sensor level for
    /// this tick; polarity is the platform's concern.
    pub fn tick(&mut self, sensor_active: bool, now: Instant) -> TickResult {
        if self.lifecycle.is_asleep() {
            return TickResult {
                next_deadline: now + TICK_INTERVAL,
                sleep_duration: TICK_INTERVAL,
                asleep: true,
            };
        }

        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = TICK_INTERVAL.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift_ms {
            self.next_tick = now;
        }

        self.process_commands(now);

        if self.trigger.poll_sensor(sensor_active, now) {
            self.dispatcher.advance_mode(self.trigger.color(), now);
            self.lifecycle.record_activity(now);

            #[cfg(feature = "esp32-log")]
            println!("[scheduler] trigger -> {}", self.dispatcher.mode().as_str());
        }

        self.render_frame(now);
        self.output.write(&self.frame);

        if self.lifecycle.is_expired(now) {
            self.shutdown();
            return TickResult {
                next_deadline: now + TICK_INTERVAL,
                sleep_duration: TICK_INTERVAL,
                asleep: true,
            };
        }

        // Calculate next tick deadline
        self.next_tick += TICK_INTERVAL;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
            asleep: false,
        }
    }

    /// Apply one remote command and return its acknowledgement.
    ///
    /// Public so transports that need a synchronous response can bypass
    /// the queue; queued commands go through the same path. Accepted
    /// commands refresh the idle window; rejected ones mutate nothing.
    pub fn handle_command(
        &mut self,
        command: Command,
        now: Instant,
    ) -> Result<Status, CommandError> {
        match command {
            Command::GetStatus => {}
            Command::SetMode(raw) => {
                let mode = PatternId::from_raw(raw).ok_or(CommandError::UnknownMode(raw))?;
                self.dispatcher.set_mode(mode, self.trigger.color(), now);
            }
            Command::SetBrightness(value) => {
                self.trigger.set_brightness(value);
                self.dispatcher.rearm();
            }
            Command::SetColor { r, g, b } => {
                let color = self.trigger.set_color(r, g, b);
                self.dispatcher.set_color(color);
                self.dispatcher.rearm();
            }
            Command::Clear => {
                self.dispatcher.clear();
            }
            Command::ToggleAuto => {
                self.trigger.toggle_auto();
            }
            Command::ToggleManual => {
                let enabled = self.trigger.toggle_manual();
                if !enabled {
                    // Leaving manual control blanks the strip; an explicit
                    // set-mode re-arms rendering.
                    self.dispatcher.clear();
                }
            }
        }

        self.lifecycle.record_activity(now);
        Ok(self.status())
    }

    /// Current externally observable state.
    pub fn status(&self) -> Status {
        Status {
            mode: self.dispatcher.mode(),
            auto_mode: self.trigger.auto_mode(),
            manual_mode: self.trigger.manual_mode(),
            cleared: self.dispatcher.is_cleared(),
        }
    }

    pub const fn dispatcher(&self) -> &ModeDispatcher {
        &self.dispatcher
    }

    pub const fn trigger(&self) -> &TriggerController {
        &self.trigger
    }

    pub const fn lifecycle(&self) -> &PowerLifecycle {
        &self.lifecycle
    }

    /// Drain all pending commands from the queue (non-blocking)
    fn process_commands(&mut self, now: Instant) {
        let commands = self.commands;
        while let Ok(command) = commands.try_receive() {
            let _ = self.handle_command(command, now);
        }
    }

    fn render_frame(&mut self, now: Instant) {
        if self.trigger.manual_mode() && !self.dispatcher.is_cleared() {
            // Manual control paints the shared color directly; the
            // pattern does not own the buffer while this is on.
            let color = self.trigger.color();
            for led in &mut self.frame {
                *led = color;
            }
        } else {
            self.dispatcher.render_into(now, &mut self.frame);
        }

        apply_brightness(&mut self.frame, self.trigger.brightness());
    }

    /// Orderly shutdown: blank, stop collaborators, sleep for good.
    fn shutdown(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[scheduler] idle timeout, entering deep sleep");

        for led in &mut self.frame {
            *led = Rgb { r: 0, g: 0, b: 0 };
        }
        self.output.write(&self.frame);

        self.power.stop_transport();
        self.power.release_access_point();
        self.power.enter_deep_sleep();

        self.lifecycle.mark_asleep();
    }
}

/// Scale a frame by the global brightness
fn apply_brightness(frame: &mut [Rgb], brightness: u8) {
    if brightness == 255 {
        return;
    }

    if brightness == 0 {
        for pixel in frame.iter_mut() {
            *pixel = Rgb { r: 0, g: 0, b: 0 };
        }
        return;
    }

    for pixel in frame.iter_mut() {
        pixel.r = scale8(pixel.r, brightness);
        pixel.g = scale8(pixel.g, brightness);
        pixel.b = scale8(pixel.b, brightness);
    }
}
