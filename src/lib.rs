//! Polled driver for quadrature rotary encoders with a push-button.
//!
//! Targets the common KY-040 style module: two phase pins (CLK / DT) and an
//! active-low switch (SW). The driver does not configure GPIO and does not
//! use interrupts; the caller polls [`Encoder::update`] from a loop or a
//! timer tick, often enough to see every transition of phase A.
//!
//! # Architecture
//!
//! - [`capability`] — the [`PinReader`] and [`Clock`] traits the encoder is
//!   built on, plus adapters for `embedded-hal` pins and the Embassy clock.
//! - [`QuadratureDecoder`] — counts one step per rising edge of phase A.
//! - [`ButtonDebouncer`] — time-window debounce for the switch.
//! - [`Encoder`] — ties the above to injected hardware and a poll delay.
//!
//! # Quick start
//!
//! ```ignore
//! use poll_encoder::{Encoder, EncoderPins, HalInputs};
//!
//! let inputs = HalInputs::new(clk_pin, dt_pin, sw_pin);
//! let mut encoder = Encoder::new(inputs, clock, delay, EncoderPins::lines())?;
//!
//! loop {
//!     if encoder.update()? {
//!         // debounced button press
//!     }
//!     let position = encoder.count();
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — [`defmt::Format`] on public types and debug/trace
//!   logging of steps and presses.
//! - **`embassy`** — [`EmbassyClock`], a [`Clock`] backed by
//!   `embassy_time::Instant`.

#![cfg_attr(not(test), no_std)]

pub mod capability;
mod button;
mod config;
mod encoder;
mod error;
mod quadrature;

#[cfg(test)]
mod testing;

pub use button::ButtonDebouncer;
#[cfg(feature = "embassy")]
pub use capability::EmbassyClock;
pub use capability::{Clock, HalInputs, Line, PinReader};
pub use config::{EncoderConfig, EncoderPins, DEFAULT_DEBOUNCE_WINDOW_US, DEFAULT_POLL_DELAY_MS};
pub use encoder::Encoder;
pub use error::EncoderError;
pub use quadrature::{Direction, QuadratureDecoder};
