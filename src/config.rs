//! Encoder configuration.

use crate::capability::Line;

/// Default debounce window: 50 ms.
pub const DEFAULT_DEBOUNCE_WINDOW_US: u64 = 50_000;

/// Default delay after every poll: 1 ms.
pub const DEFAULT_POLL_DELAY_MS: u32 = 1;

/// Timing parameters for the encoder.
///
/// [`EncoderConfig::default()`] matches the classic KY-040 polling loop:
/// a 50 ms button window and a 1 ms pause after each poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderConfig {
    /// Minimum gap, in microseconds, between two low button samples for the
    /// second one to count as a new press. Default: 50 000.
    pub debounce_window_us: u64,
    /// Delay, in milliseconds, performed at the end of every update.
    /// Default: 1.
    pub poll_delay_ms: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            debounce_window_us: DEFAULT_DEBOUNCE_WINDOW_US,
            poll_delay_ms: DEFAULT_POLL_DELAY_MS,
        }
    }
}

impl EncoderConfig {
    /// Replace the button debounce window.
    pub const fn with_debounce_window_us(mut self, window_us: u64) -> Self {
        self.debounce_window_us = window_us;
        self
    }

    /// Replace the per-poll delay.
    pub const fn with_poll_delay_ms(mut self, delay_ms: u32) -> Self {
        self.poll_delay_ms = delay_ms;
        self
    }
}

/// Identifiers of the three encoder pins, as understood by the
/// [`PinReader`](crate::PinReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderPins<P> {
    /// Phase A ("CLK").
    pub clk: P,
    /// Phase B ("DT").
    pub dt: P,
    /// Push-button ("SW"), active-low.
    pub sw: P,
}

impl<P> EncoderPins<P> {
    pub const fn new(clk: P, dt: P, sw: P) -> Self {
        Self { clk, dt, sw }
    }
}

impl EncoderPins<Line> {
    /// Pin identifiers for use with [`HalInputs`](crate::HalInputs).
    pub const fn lines() -> Self {
        Self::new(Line::Clk, Line::Dt, Line::Sw)
    }
}
