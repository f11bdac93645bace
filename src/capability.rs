//! Hardware capabilities consumed by the [`Encoder`](crate::Encoder).
//!
//! The encoder never touches GPIO or timers directly. It is handed three
//! capabilities at construction time:
//!
//! - a [`PinReader`] that samples the level of a pin identified by `P`,
//! - a [`Clock`] returning a monotonic timestamp in **microseconds**,
//! - a delay implementing `embedded_hal::delay::DelayNs` (blocking polls)
//!   or `embedded_hal_async::delay::DelayNs` (async polls).
//!
//! Closures satisfy both [`PinReader`] and [`Clock`], so tests and quick
//! prototypes can wire the encoder up without defining types. For real
//! hardware, [`HalInputs`] adapts three `embedded-hal` input pins.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};

// ── Pin reader ───────────────────────────────────────────────────────────

/// Samples the digital level of a pin.
///
/// `true` means the pin is high. Reads must be non-blocking; pin mode and
/// pull-ups are configured by the caller before the encoder is built.
pub trait PinReader<P> {
    /// Error returned when a pin cannot be sampled.
    type Error;

    /// Return the current level of `pin`.
    fn read(&mut self, pin: P) -> Result<bool, Self::Error>;
}

impl<P, F> PinReader<P> for F
where
    F: FnMut(P) -> bool,
{
    type Error = Infallible;

    fn read(&mut self, pin: P) -> Result<bool, Infallible> {
        Ok(self(pin))
    }
}

// ── Clock ────────────────────────────────────────────────────────────────

/// Monotonic time source.
///
/// The returned value must never decrease between calls. The unit is fixed
/// to microseconds so that the debounce window in
/// [`EncoderConfig`](crate::EncoderConfig) has an unambiguous meaning.
pub trait Clock {
    /// Current timestamp in microseconds.
    fn now_micros(&mut self) -> u64;
}

impl<F> Clock for F
where
    F: FnMut() -> u64,
{
    fn now_micros(&mut self) -> u64 {
        self()
    }
}

/// [`Clock`] backed by the Embassy time driver.
#[cfg(feature = "embassy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl Clock for EmbassyClock {
    fn now_micros(&mut self) -> u64 {
        embassy_time::Instant::now().as_micros()
    }
}

// ── embedded-hal adapter ─────────────────────────────────────────────────

/// Logical encoder lines, used as pin identifiers by [`HalInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Phase A ("CLK" on KY-040 modules).
    Clk,
    /// Phase B ("DT").
    Dt,
    /// Push-button, active-low ("SW").
    Sw,
}

/// [`PinReader`] over three owned `embedded-hal` input pins.
///
/// All three pins must share one error type, which is the case for the
/// GPIO types of every HAL where the pins are infallible.
///
/// # Example
///
/// ```ignore
/// use poll_encoder::{Encoder, EncoderPins, HalInputs};
///
/// let inputs = HalInputs::new(clk, dt, sw);
/// let mut encoder = Encoder::new(inputs, clock, delay, EncoderPins::lines())?;
/// ```
pub struct HalInputs<CLK, DT, SW> {
    clk: CLK,
    dt: DT,
    sw: SW,
}

impl<CLK, DT, SW> HalInputs<CLK, DT, SW> {
    /// Take ownership of the phase-A, phase-B and button pins.
    pub fn new(clk: CLK, dt: DT, sw: SW) -> Self {
        Self { clk, dt, sw }
    }

    /// Give the pins back.
    pub fn release(self) -> (CLK, DT, SW) {
        (self.clk, self.dt, self.sw)
    }
}

impl<CLK, DT, SW> PinReader<Line> for HalInputs<CLK, DT, SW>
where
    CLK: InputPin,
    DT: InputPin + ErrorType<Error = CLK::Error>,
    SW: InputPin + ErrorType<Error = CLK::Error>,
{
    type Error = CLK::Error;

    fn read(&mut self, line: Line) -> Result<bool, Self::Error> {
        match line {
            Line::Clk => self.clk.is_high(),
            Line::Dt => self.dt.is_high(),
            Line::Sw => self.sw.is_high(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorKind;

    struct FakePin {
        level: Result<bool, ErrorKind>,
    }

    impl ErrorType for FakePin {
        type Error = ErrorKind;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, ErrorKind> {
            self.level
        }

        fn is_low(&mut self) -> Result<bool, ErrorKind> {
            self.level.map(|high| !high)
        }
    }

    fn pin(level: bool) -> FakePin {
        FakePin { level: Ok(level) }
    }

    // ── Closures ─────────────────────────────────────────────────────

    #[test]
    fn closure_reader_passes_pin_id_through() {
        let mut reader = |pin: u8| pin == 7;
        assert_eq!(reader.read(7), Ok(true));
        assert_eq!(reader.read(3), Ok(false));
    }

    #[test]
    fn closure_clock_returns_callers_time() {
        let mut ticks = 0u64;
        let mut clock = move || {
            ticks += 250;
            ticks
        };
        assert_eq!(clock.now_micros(), 250);
        assert_eq!(clock.now_micros(), 500);
    }

    // ── HalInputs ────────────────────────────────────────────────────

    #[test]
    fn hal_inputs_route_each_line_to_its_pin() {
        let mut inputs = HalInputs::new(pin(true), pin(false), pin(true));
        assert_eq!(inputs.read(Line::Clk), Ok(true));
        assert_eq!(inputs.read(Line::Dt), Ok(false));
        assert_eq!(inputs.read(Line::Sw), Ok(true));
    }

    #[test]
    fn hal_inputs_surface_pin_errors() {
        let failing = FakePin {
            level: Err(ErrorKind::Other),
        };
        let mut inputs = HalInputs::new(pin(true), failing, pin(true));
        assert_eq!(inputs.read(Line::Dt), Err(ErrorKind::Other));
        assert_eq!(inputs.read(Line::Clk), Ok(true));
    }

    #[test]
    fn hal_inputs_release_returns_pins() {
        let inputs = HalInputs::new(pin(true), pin(false), pin(false));
        let (mut clk, mut dt, _sw) = inputs.release();
        assert_eq!(clk.is_high(), Ok(true));
        assert_eq!(dt.is_low(), Ok(true));
    }
}
