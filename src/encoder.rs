//! Polled rotary encoder with integrated push-button.
//!
//! [`Encoder`] combines a [`QuadratureDecoder`] and a [`ButtonDebouncer`]
//! with the injected hardware capabilities. Each call to
//! [`update`](Encoder::update) samples the pins once, advances the count on
//! a rising edge of phase A, debounces the button, and then pauses for the
//! configured poll delay.

use crate::button::ButtonDebouncer;
use crate::capability::{Clock, PinReader};
use crate::config::{EncoderConfig, EncoderPins};
use crate::error::EncoderError;
use crate::quadrature::{Direction, QuadratureDecoder};

/// Rotary encoder driver, polled by the caller.
///
/// - `R` — [`PinReader`] for pin identifiers of type `P`
/// - `C` — microsecond [`Clock`]
/// - `D` — delay; `embedded_hal::delay::DelayNs` for [`update`](Self::update)
///   or `embedded_hal_async::delay::DelayNs` for
///   [`update_async`](Self::update_async)
///
/// One instance per physical encoder. `update` takes `&mut self`, so sharing
/// an encoder between tasks needs a mutex chosen by the caller.
///
/// # Example
///
/// ```ignore
/// use poll_encoder::{Encoder, EncoderPins};
///
/// let mut encoder = Encoder::new(read_pin, now_us, delay, EncoderPins::new(17, 18, 27))?;
///
/// loop {
///     if encoder.update()? {
///         // button pressed
///     }
///     let position = encoder.count();
/// }
/// ```
pub struct Encoder<R, C, D, P> {
    reader: R,
    clock: C,
    delay: D,
    pins: EncoderPins<P>,
    config: EncoderConfig,
    decoder: QuadratureDecoder,
    button: ButtonDebouncer,
}

impl<R, C, D, P> Encoder<R, C, D, P>
where
    R: PinReader<P>,
    C: Clock,
    P: Copy,
{
    /// Create an encoder with the default [`EncoderConfig`].
    ///
    /// Phase A is sampled once here so the first poll does not report a
    /// spurious edge.
    ///
    /// # Errors
    /// * [`EncoderError::Pin`] if the initial phase-A read fails
    pub fn new(
        reader: R,
        clock: C,
        delay: D,
        pins: EncoderPins<P>,
    ) -> Result<Self, EncoderError<R::Error>> {
        Self::with_config(reader, clock, delay, pins, EncoderConfig::default())
    }

    /// Create an encoder with explicit timing parameters.
    ///
    /// # Errors
    /// * [`EncoderError::Pin`] if the initial phase-A read fails
    pub fn with_config(
        mut reader: R,
        clock: C,
        delay: D,
        pins: EncoderPins<P>,
        config: EncoderConfig,
    ) -> Result<Self, EncoderError<R::Error>> {
        let initial_phase_a = reader.read(pins.clk)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "encoder ready: phase A {}, debounce {} us",
            initial_phase_a,
            config.debounce_window_us
        );

        Ok(Self {
            reader,
            clock,
            delay,
            pins,
            config,
            decoder: QuadratureDecoder::new(initial_phase_a),
            button: ButtonDebouncer::new(config.debounce_window_us),
        })
    }

    // -----------------------------------------------------------------------
    // State
    // -----------------------------------------------------------------------

    /// Net number of steps since construction (or the last reset).
    pub fn count(&self) -> i32 {
        self.decoder.count()
    }

    /// Direction of the most recent step. Not cleared by idle polls.
    pub fn direction(&self) -> Direction {
        self.decoder.direction()
    }

    /// Timestamp (µs) of the latest low button sample, `0` before any.
    pub fn last_button_press(&self) -> u64 {
        self.button.last_press()
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn pins(&self) -> &EncoderPins<P> {
        &self.pins
    }

    /// Overwrite the count, e.g. to match a parameter loaded from storage.
    pub fn set_count(&mut self, count: i32) {
        self.decoder.set_count(count);
    }

    /// Zero the count and clear the direction.
    ///
    /// Phase-A and button history are kept, so a reset never produces a
    /// phantom step or press.
    pub fn reset(&mut self) {
        self.decoder.reset();
    }

    /// Consume the encoder and hand back its capabilities.
    pub fn release(self) -> (R, C, D) {
        (self.reader, self.clock, self.delay)
    }

    // -----------------------------------------------------------------------
    // Polling
    // -----------------------------------------------------------------------

    /// Sample the pins and advance the state, without the trailing delay.
    fn poll(&mut self) -> Result<bool, EncoderError<R::Error>> {
        let pins = self.pins;

        let phase_a = read_pin(&mut self.reader, pins.clk)?;
        let reader = &mut self.reader;
        let _stepped = self
            .decoder
            .step(phase_a, || read_pin(reader, pins.dt))?;

        #[cfg(feature = "defmt")]
        if let Some(direction) = _stepped {
            defmt::trace!("step {} -> count {}", direction, self.decoder.count());
        }

        let button_high = read_pin(&mut self.reader, pins.sw)?;
        let clock = &mut self.clock;
        let pressed = self.button.sample(button_high, || clock.now_micros());

        #[cfg(feature = "defmt")]
        if pressed {
            defmt::debug!("button press at {} us", self.button.last_press());
        }

        Ok(pressed)
    }
}

impl<R, C, D, P> Encoder<R, C, D, P>
where
    R: PinReader<P>,
    C: Clock,
    D: embedded_hal::delay::DelayNs,
    P: Copy,
{
    /// Poll the encoder once, blocking for the configured delay.
    ///
    /// Returns `true` if a debounced button press was detected on this call.
    ///
    /// # Errors
    /// * [`EncoderError::Pin`] if a pin read fails; the delay is skipped and
    ///   any state already updated in this call is kept
    pub fn update(&mut self) -> Result<bool, EncoderError<R::Error>> {
        let pressed = self.poll()?;
        self.delay.delay_ms(self.config.poll_delay_ms);
        Ok(pressed)
    }
}

impl<R, C, D, P> Encoder<R, C, D, P>
where
    R: PinReader<P>,
    C: Clock,
    D: embedded_hal_async::delay::DelayNs,
    P: Copy,
{
    /// Async form of [`update`](Self::update): the delay is awaited instead
    /// of blocking, so other tasks run in the meantime.
    ///
    /// All state changes happen before the await; dropping the future while
    /// it waits loses nothing.
    ///
    /// # Errors
    /// * [`EncoderError::Pin`] if a pin read fails
    pub async fn update_async(&mut self) -> Result<bool, EncoderError<R::Error>> {
        let pressed = self.poll()?;
        self.delay.delay_ms(self.config.poll_delay_ms).await;
        Ok(pressed)
    }
}

fn read_pin<R, P>(reader: &mut R, pin: P) -> Result<bool, EncoderError<R::Error>>
where
    R: PinReader<P>,
{
    reader.read(pin).map_err(|e| {
        #[cfg(feature = "defmt")]
        defmt::warn!("encoder pin read failed");
        EncoderError::Pin(e)
    })
}
